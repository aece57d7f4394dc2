use std::time::Duration;

use leptos::{
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
};

use crate::{
    contact::{ContactField, ContactForm, SUBMIT_DELAY_MS},
    site::{CONTACT_INFO, SOCIAL_LINKS},
};

use super::{
    pointer::use_pointer,
    reveal::{reveal_class, use_revealed},
    toast::use_toaster,
};

#[component]
pub fn Contact() -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::default());
    let (submitting, set_submitting) = signal(false);
    let (focused, set_focused) = signal(None::<ContactField>);
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let pointer = use_pointer().pointer;
    let header_ref = NodeRef::<html::Div>::new();
    let header_visible = use_revealed(header_ref);

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(e) = form.with_untracked(ContactForm::validate) {
            toaster.toast("Can't send yet", e.to_string());
            return;
        }
        set_submitting.set(true);
        log::info!("simulating contact form submission");
        let res = set_timeout_with_handle(
            move || {
                pending.try_set_value(None);
                form.try_update(ContactForm::reset);
                set_submitting.try_set(false);
                toaster.toast(
                    "Message Sent!",
                    "Thank you for your message. I'll get back to you soon!",
                );
            },
            Duration::from_millis(SUBMIT_DELAY_MS),
        );
        match res {
            Ok(handle) => {
                pending.set_value(Some(handle));
            }
            Err(e) => {
                log::error!("couldn't schedule contact submission: {e:?}");
                set_submitting.set(false);
            }
        }
    };

    let field_class = move |field: ContactField| {
        move || {
            if focused.get() == Some(field) {
                "form-field scale-[1.02] shadow-lg shadow-primary/20"
            } else {
                "form-field"
            }
        }
    };
    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_string());
    let on_input = move |field: ContactField| {
        move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)))
    };

    view! {
        <section id="contact" class="py-20 px-6 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <div node_ref=header_ref class=reveal_class(header_visible, "text-center mb-16")>
                    <h2 class="text-4xl md:text-6xl font-bold text-text-primary mb-6">
                        "Get In " <span class="gradient-text">"Touch"</span>
                    </h2>
                    <p class="text-xl text-text-secondary max-w-3xl mx-auto">
                        "Ready to start your next project? Let's work together to create something amazing."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div
                        class="glass-card p-8 rounded-lg hover-glow relative overflow-hidden transition-transform duration-300"
                        style:transform=move || format!("perspective(1000px) {}", pointer.get().tilt(1.0))
                    >
                        <div
                            class="absolute inset-0 opacity-10 pointer-events-none transition-all duration-500"
                            style:background=move || pointer.get().glow(20.0)
                        />
                        <h3 class="relative text-2xl font-semibold text-text-primary mb-6">"Send a Message"</h3>
                        <form class="relative space-y-6" on:submit=on_submit novalidate>
                            <div class="grid md:grid-cols-2 gap-4">
                                {[ContactField::Name, ContactField::Email]
                                    .into_iter()
                                    .map(|field| {
                                        let input_type = if field == ContactField::Email {
                                            "email"
                                        } else {
                                            "text"
                                        };
                                        view! {
                                            <input
                                                name=field.as_str()
                                                type=input_type
                                                placeholder=field.placeholder()
                                                required
                                                class=field_class(field)
                                                prop:value=value(field)
                                                on:input=on_input(field)
                                                on:focus=move |_| set_focused.set(Some(field))
                                                on:blur=move |_| set_focused.set(None)
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <input
                                name=ContactField::Subject.as_str()
                                type="text"
                                placeholder=ContactField::Subject.placeholder()
                                required
                                class=field_class(ContactField::Subject)
                                prop:value=value(ContactField::Subject)
                                on:input=on_input(ContactField::Subject)
                                on:focus=move |_| set_focused.set(Some(ContactField::Subject))
                                on:blur=move |_| set_focused.set(None)
                            />
                            <textarea
                                name=ContactField::Message.as_str()
                                placeholder=ContactField::Message.placeholder()
                                rows="6"
                                required
                                class=move || format!("{} resize-none", field_class(ContactField::Message)())
                                prop:value=value(ContactField::Message)
                                on:input=on_input(ContactField::Message)
                                on:focus=move |_| set_focused.set(Some(ContactField::Message))
                                on:blur=move |_| set_focused.set(None)
                            ></textarea>
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full bg-gradient-primary hover:opacity-90 text-primary-foreground rounded-md py-4 text-lg font-medium hover-glow disabled:opacity-60"
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Message ➤" }}
                            </button>
                        </form>
                    </div>
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-text-primary mb-6">
                                "Contact Information"
                            </h3>
                            <div class="space-y-4">
                                {CONTACT_INFO
                                    .iter()
                                    .map(|info| {
                                        let kind = info.kind;
                                        let href = info.href();
                                        view! {
                                            <a
                                                href=href.clone().unwrap_or_else(|| "#contact".to_string())
                                                class="glass-card p-4 rounded-lg flex items-center gap-4 hover-glow cursor-pointer"
                                                on:click=move |ev| {
                                                    if href.is_none() {
                                                        ev.prevent_default();
                                                        return;
                                                    }
                                                    toaster.toast(
                                                        format!("Opening {}", kind.title()),
                                                        format!(
                                                            "Launching {} application...",
                                                            kind.title().to_lowercase(),
                                                        ),
                                                    );
                                                }
                                            >
                                                <span class="p-3 rounded-full bg-gradient-primary text-xl">
                                                    {kind.icon()}
                                                </span>
                                                <div>
                                                    <h4 class="font-medium text-text-primary">{kind.title()}</h4>
                                                    <p class="text-text-secondary">{info.value}</p>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div>
                            <h3 class="text-2xl font-semibold text-text-primary mb-6">"Follow Me"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        let name = link.name;
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=name
                                                class="p-4 glass-card rounded-full text-2xl hover-glow"
                                                on:click=move |_| {
                                                    toaster.toast(
                                                        format!("Opening {name}"),
                                                        format!("Redirecting to {name} profile..."),
                                                    )
                                                }
                                            >
                                                <i class=link.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
