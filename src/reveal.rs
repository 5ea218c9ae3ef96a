//! Section reveal-on-scroll wiring.
//!
//! Hides every `[data-reveal]` element, then reveals each one the first time
//! it intersects the viewport (with a 10% margin on both vertical edges).
//! The whole controller stands down when the platform has no
//! `IntersectionObserver` or the user prefers reduced motion — in either
//! case no inline style is written, no class is toggled, and no observer is
//! created, so marked sections simply render visible.

use behavior::consts::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_TRANSITION, VISIBLE_CLASS};
use behavior::reveal::{RevealCore, should_enable};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::dom;
use crate::style;

fn hide_with_transition(el: &Element) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", &format!("translateY({REVEAL_OFFSET_PX}px)"));
    dom::set_style(el, "transition", REVEAL_TRANSITION);
}

/// Wire up the reveal effect, or do nothing when it should not run.
pub fn init(window: &Window, doc: &Document) {
    let observer_supported = dom::intersection_observer_supported(window);
    let reduced_motion = dom::prefers_reduced_motion(window);
    if !should_enable(observer_supported, reduced_motion) {
        log::debug!(
            "reveal: standing down (observer supported: {observer_supported}, reduced motion: {reduced_motion})"
        );
        return;
    }

    let elements = dom::query_all(doc, REVEAL_SELECTOR);
    if elements.is_empty() {
        log::debug!("reveal: no marked elements in markup, skipping");
        return;
    }

    style::inject_reveal_rule(doc);

    let mut core = RevealCore::new(elements.len());
    let observed = elements.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            if core.on_intersection(index, entry.is_intersecting()) {
                dom::add_class(&target, VISIBLE_CLASS);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from(0.0));
    let Ok(observer) = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) else {
        return;
    };

    for el in &elements {
        hide_with_transition(el);
        observer.observe(el);
    }

    // The observer and its callback live for the page lifetime.
    callback.forget();
    std::mem::forget(observer);
}
