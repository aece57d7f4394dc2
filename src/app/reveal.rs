use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time the element scrolls into view.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Fade-and-rise classes for a block gated on [`use_revealed`].
pub fn reveal_class(revealed: ReadSignal<bool>, base: &'static str) -> impl Fn() -> String {
    move || {
        if revealed.get() {
            format!("{base} transition-all duration-1000 opacity-100 translate-y-0")
        } else {
            format!("{base} transition-all duration-1000 opacity-0 translate-y-10")
        }
    }
}
