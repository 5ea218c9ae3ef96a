//! Thin web-sys helpers: anchor lookup, class mutation, event binding.
//!
//! Every controller goes through these helpers instead of calling `web-sys`
//! directly, so the "locate anchors", "bind event", and environment-query
//! capabilities live in one place. All helpers degrade silently: a missing
//! element is `None`, a failed DOM call is discarded. Nothing here throws.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, Window};

/// The browser window, when running in one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The first element matching `selector`, if any.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The element children of `parent`, in document order.
pub fn child_elements(parent: &Element) -> Vec<Element> {
    let children = parent.children();
    (0..children.length()).filter_map(|i| children.item(i)).collect()
}

/// Add `class` to the element's class list.
pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

/// Remove `class` from the element's class list.
pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Set an inline style property, when the element can carry one.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Suppress page scrolling by setting `overflow: hidden` on the body.
pub fn lock_body_scroll(doc: &Document) {
    if let Some(body) = doc.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

/// Restore page scrolling by clearing the body overflow override.
pub fn unlock_body_scroll(doc: &Document) {
    if let Some(body) = doc.body() {
        let _ = body.style().remove_property("overflow");
    }
}

/// Bind a click handler for the page lifetime.
pub fn on_click(target: &EventTarget, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bind a passive scroll handler on the window for the page lifetime.
///
/// Passive listeners promise never to call `preventDefault`, so the browser
/// scrolls without waiting on the callback.
pub fn on_scroll_passive(window: &Window, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Current vertical scroll position in CSS pixels.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Whether the user's platform asks for reduced motion.
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(behavior::consts::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

/// Whether the visibility-observation capability exists on this platform.
pub fn intersection_observer_supported(window: &Window) -> bool {
    js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
        .map_or(false, |value| !value.is_undefined())
}
