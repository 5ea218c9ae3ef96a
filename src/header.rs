//! Header scroll-state wiring.
//!
//! Recomputes the header state on every scroll event (passively, so native
//! scrolling is never delayed) and once at initialization so the header is
//! correct when the page loads mid-scroll, e.g. after a reload.

use behavior::consts::{HEADER_SELECTOR, SCROLLED_CLASS};
use behavior::header::HeaderState;
use web_sys::{Document, Window};

use crate::dom;

/// Wire up the header scroll state, or do nothing when the header is absent.
pub fn init(window: &Window, doc: &Document) {
    let Some(nav) = dom::query(doc, HEADER_SELECTOR) else {
        log::debug!("header: no nav in markup, skipping");
        return;
    };

    let win = window.clone();
    let mut update = move || {
        if HeaderState::for_scroll_y(dom::scroll_y(&win)).is_scrolled() {
            dom::add_class(&nav, SCROLLED_CLASS);
        } else {
            dom::remove_class(&nav, SCROLLED_CLASS);
        }
    };
    update();
    dom::on_scroll_passive(window, update);
}
