use leptos::{ev::MouseEvent, prelude::*};

use crate::site::{nav_target, LOGO_SRC, NAV_ITEMS, NAV_SCROLL_THRESHOLD};

use super::{pointer::use_pointer, scroll_to_section};

#[component]
pub fn Navigation() -> impl IntoView {
    let scroll_y = use_pointer().scroll_y;
    let is_scrolled = Memo::new(move |_| scroll_y.get() > NAV_SCROLL_THRESHOLD);
    let (menu_open, set_menu_open) = signal(false);

    let nav_click = move |href: &'static str| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            if let Some(id) = nav_target(href) {
                scroll_to_section(id);
            }
        }
    };

    view! {
        <nav class=move || {
            if is_scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-background/80 backdrop-blur-md border-b border-border shadow-lg"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0">
                        <a
                            href="#home"
                            on:click=nav_click("#home")
                            class="text-2xl font-bold gradient-text hover:opacity-80 transition-opacity"
                        >
                            <img src=LOGO_SRC alt="Portfolio" class="h-12 w-auto" />
                        </a>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href
                                            on:click=nav_click(item.href)
                                            class="text-text-secondary hover:text-text-primary px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200 relative group"
                                        >
                                            {item.name}
                                            <span class="absolute inset-x-0 bottom-0 h-0.5 bg-gradient-primary transform scale-x-0 group-hover:scale-x-100 transition-transform duration-200" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="hidden md:block">
                        <button
                            class="px-4 py-2 rounded-md border border-border bg-surface/50 backdrop-blur-sm hover:bg-surface/70"
                            on:click=nav_click("#contact")
                        >
                            "Let's Talk"
                        </button>
                    </div>
                    <div class="md:hidden">
                        <button
                            class="p-2 text-text-primary text-2xl"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 bg-background/95 backdrop-blur-md border-b border-border shadow-lg">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        on:click=nav_click(item.href)
                                        class="text-text-secondary hover:text-text-primary block px-3 py-2 rounded-md text-base font-medium transition-colors duration-200"
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <div class="pt-4 pb-2">
                            <button
                                class="w-full px-4 py-2 rounded-md border border-border bg-surface/50 backdrop-blur-sm hover:bg-surface/70"
                                on:click=nav_click("#contact")
                            >
                                "Let's Talk"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
