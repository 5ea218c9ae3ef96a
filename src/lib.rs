//! # theme
//!
//! Client-side behavior layer for the storefront theme, compiled to
//! WebAssembly and loaded by the page. Wires up the mobile navigation
//! drawer, the scroll-to-section indicator, the scroll-triggered section
//! reveal, and the header scroll state — all as class toggles driven by
//! native CSS transitions.
//!
//! Decision logic lives in the `behavior` crate; this crate owns every
//! `web-sys` call and is deliberately thin: translate DOM events into core
//! inputs, apply the effects the cores emit.
//!
//! ERROR HANDLING
//! ==============
//! Missing markup anchors and absent platform capabilities are expected,
//! non-exceptional conditions: the affected controller stands down entirely
//! (no listeners, no partial effects) and the rest of the page is untouched.

mod boot;
mod dom;
mod drawer;
mod header;
mod reveal;
mod scroll_indicator;
mod style;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, invoked by the host page on module load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    boot::run();
}
