//! Injected stylesheet for the reveal visible state.

use behavior::consts::{REVEAL_SELECTOR, REVEAL_STYLE_ID, VISIBLE_CLASS};
use web_sys::Document;

/// Inject the rule forcing revealed elements fully opaque and un-offset,
/// overriding their inline hidden state.
///
/// Idempotent: the `<style>` element carries a fixed id and injection is
/// skipped when that id is already present, so running initialization twice
/// never duplicates the rule.
pub fn inject_reveal_rule(doc: &Document) {
    if doc.get_element_by_id(REVEAL_STYLE_ID).is_some() {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_id(REVEAL_STYLE_ID);
    style.set_text_content(Some(&format!(
        "{REVEAL_SELECTOR}.{VISIBLE_CLASS} {{ opacity: 1 !important; transform: translateY(0) !important; }}"
    )));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}
