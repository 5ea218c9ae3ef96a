//! Scroll-to-first-section indicator wiring.
//!
//! On click, snapshots the main content container's children, asks the
//! section core which child is the first content section, and smooth-scrolls
//! it to the top of the viewport. Missing trigger, missing container, or no
//! qualifying section all degrade to doing nothing.

use behavior::consts::{MAIN_CONTENT_ID, SCROLL_INDICATOR_SELECTOR};
use behavior::section::{SectionCandidate, first_qualifying};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

fn candidate_for(el: &Element) -> SectionCandidate {
    SectionCandidate::new(&el.tag_name(), &el.class_name())
}

fn scroll_to_top_of_viewport(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Wire up the scroll indicator, or do nothing when the trigger is absent.
pub fn init(doc: &Document) {
    let Some(trigger) = dom::query(doc, SCROLL_INDICATOR_SELECTOR) else {
        log::debug!("scroll indicator: no trigger in markup, skipping");
        return;
    };

    let doc = doc.clone();
    dom::on_click(&trigger, move || {
        let Some(main) = doc.get_element_by_id(MAIN_CONTENT_ID) else {
            return;
        };
        let children = dom::child_elements(&main);
        let candidates: Vec<SectionCandidate> = children.iter().map(candidate_for).collect();
        if let Some(section) = first_qualifying(&candidates).and_then(|index| children.get(index)) {
            scroll_to_top_of_viewport(section);
        }
    });
}
