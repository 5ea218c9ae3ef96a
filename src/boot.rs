//! Startup: wait for parsed markup, then run every initializer once.
//!
//! Each initializer locates its own anchors and stands down independently if
//! they are missing; none of them depends on another having run.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::{dom, drawer, header, reveal, scroll_indicator};

/// Whether the document is already past the "loading" ready state.
fn ready_now(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn init_all(window: &Window, doc: &Document) {
    drawer::init(doc);
    scroll_indicator::init(doc);
    reveal::init(window, doc);
    header::init(window, doc);
}

/// Initialize once the structural markup is available for lookup.
///
/// Defers to `DOMContentLoaded` while the document is still loading, and
/// runs immediately when that point has already passed — so the theme
/// behaves the same whether its script loads early or late.
pub fn run() {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };

    if ready_now(&doc.ready_state()) {
        init_all(&window, &doc);
        return;
    }

    let win = window.clone();
    let doc_for_init = doc.clone();
    let on_ready = Closure::wrap(Box::new(move || {
        init_all(&win, &doc_for_init);
    }) as Box<dyn FnMut()>);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
