use leptos::prelude::*;
use leptos_use::{
    use_mouse, use_window_scroll, use_window_size, UseMouseReturn, UseWindowSizeReturn,
};

use crate::parallax::{self, Pointer};

#[derive(Debug, Clone, Copy)]
pub struct PointerContext {
    pub pointer: Memo<Pointer>,
    pub scroll_y: Signal<f64>,
    pub scroll_progress: Memo<f64>,
}

pub fn provide_pointer() -> PointerContext {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();
    let (_, scroll_y) = use_window_scroll();

    let pointer =
        Memo::new(move |_| Pointer::normalized(x.get(), y.get(), width.get(), height.get()));
    let scroll_progress = Memo::new(move |_| {
        let scrolled = scroll_y.get();
        // nothing to measure before the first scroll, including on the server
        if scrolled <= 0.0 {
            return 0.0;
        }
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        parallax::scroll_progress(scrolled, document_height, height.get())
    });

    let ctx = PointerContext {
        pointer,
        scroll_y,
        scroll_progress,
    };
    provide_context(ctx);
    ctx
}

pub fn use_pointer() -> PointerContext {
    expect_context::<PointerContext>()
}
