use std::time::Duration;

use leptos::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: usize,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<usize>,
}

impl Toaster {
    pub fn toast(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
        };
        log::debug!("toast: {}", toast.title);
        self.toasts.update(|t| t.push(toast));

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.try_update(|t| t.retain(|toast| toast.id != id));
            },
            TOAST_TTL,
        );
    }

    fn dismiss(&self, id: usize) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="glass-card p-4 rounded-lg border border-border shadow-lg cursor-pointer"
                            role="status"
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <div class="font-semibold text-text-primary">{toast.title}</div>
                            <div class="text-sm text-text-secondary">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
