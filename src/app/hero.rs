use leptos::prelude::*;

use crate::{
    parallax::scroll_offset,
    site::{
        CV_FILENAME, CV_HREF, EMAIL, LOCATION, OWNER, PHONE, ROLES, ROLE_HOLD_MS,
        ROLE_TYPE_INTERVAL_MS, SOCIAL_LINKS, TAGLINE,
    },
};

use super::{pointer::use_pointer, scroll_to_section, typing::use_typing_effect};

#[component]
pub fn Hero() -> impl IntoView {
    let roles = match use_typing_effect(ROLES, ROLE_TYPE_INTERVAL_MS, ROLE_HOLD_MS) {
        Ok(typing) => Some(typing.text),
        Err(e) => {
            log::error!("{e}");
            None
        }
    };
    let ctx = use_pointer();
    let pointer = ctx.pointer;
    let progress = ctx.scroll_progress;

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-background via-background to-surface-dark">
            <div
                class="absolute inset-0 preserve-3d transition-transform duration-100 ease-out"
                style:transform=move || {
                    format!(
                        "{} {}",
                        scroll_offset(progress.get(), 150.0),
                        pointer.get().tilt(2.0),
                    )
                }
            >
                <div class="absolute inset-0 opacity-40 hero-grid-lg" />
                <div class="absolute inset-0 opacity-30 hero-grid-sm" />
                <div
                    class="absolute top-20 left-20 w-32 h-32 bg-gradient-primary rounded-full opacity-20 animate-float blur-sm"
                    style:transform=move || {
                        let p = pointer.get();
                        format!("{} {}", p.shift(15.0, 10.0), p.tilt(20.0))
                    }
                />
                <div
                    class="absolute bottom-32 right-32 w-24 h-24 bg-secondary/20 rounded-full animate-float blur-sm"
                    style:transform=move || {
                        let p = pointer.get();
                        format!("{} {}", p.shift(-18.0, -12.0), p.tilt(-25.0))
                    }
                />
                <div
                    class="absolute top-1/2 left-10 w-16 h-16 bg-accent/20 rounded-full animate-float blur-sm"
                    style:transform=move || {
                        let p = pointer.get();
                        format!("{} {}", p.shift(12.0, 8.0), p.tilt(30.0))
                    }
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/80 via-transparent to-background/40" />
            </div>
            <div
                class="absolute inset-0 pointer-events-none"
                style:transform=move || scroll_offset(progress.get(), 250.0)
            >
                <div class="absolute top-40 left-1/4 w-40 h-40 bg-primary/10 rounded-full blur-3xl animate-float" />
                <div class="absolute bottom-40 right-1/3 w-32 h-32 bg-accent/10 rounded-full blur-2xl animate-float" />
            </div>
            <div
                class="relative z-10 text-center max-w-4xl mx-auto px-6 pt-16"
                style:transform=move || scroll_offset(progress.get(), 400.0)
            >
                <h1 class="text-6xl md:text-8xl font-bold mb-6">
                    <span class="block text-text-primary">"Hey, I'm"</span>
                    <span class="block gradient-text">{OWNER}</span>
                </h1>
                <div class="text-2xl md:text-4xl font-medium text-text-secondary mb-8 h-12">
                    <span class="font-mono">{move || roles.map(|r| r.get()).unwrap_or_default()}</span>
                    <span class="animate-pulse">"|"</span>
                </div>
                <p class="text-xl text-text-secondary max-w-2xl mx-auto mb-8 leading-relaxed">
                    {TAGLINE}
                </p>
                <div class="text-text-secondary/80 mb-12 space-y-2">
                    <p class="text-lg">"📧 " {EMAIL}</p>
                    <p class="text-lg">"📱 " {PHONE}</p>
                    <p class="text-lg">"📍 " {LOCATION}</p>
                </div>
                <div class="flex flex-wrap gap-4 justify-center mb-12">
                    <button
                        class="bg-gradient-primary hover:opacity-90 text-primary-foreground rounded-md px-8 py-4 text-lg font-medium hover-glow"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work ↓"
                    </button>
                    <a
                        href=CV_HREF
                        download=CV_FILENAME
                        class="rounded-md border border-border bg-card/50 backdrop-blur-sm hover:bg-card/70 px-8 py-4 text-lg"
                    >
                        "Download CV ⤓"
                    </a>
                </div>
                <div class="flex gap-6 justify-center">
                    {SOCIAL_LINKS
                        .iter()
                        .filter(|link| link.name != "Twitter")
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="p-3 rounded-full bg-surface-light/50 backdrop-blur-sm border border-border hover:bg-surface-light/70 transition-all duration-300 hover-glow text-2xl"
                                >
                                    <i class=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=format!("mailto:{EMAIL}")
                        aria-label="Email"
                        class="p-3 rounded-full bg-surface-light/50 backdrop-blur-sm border border-border hover:bg-surface-light/70 transition-all duration-300 hover-glow text-2xl"
                    >
                        "✉"
                    </a>
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer hover:text-primary transition-colors animate-bounce text-text-secondary text-2xl"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to_section("about")
            >
                "↓"
            </button>
        </section>
    }
}
