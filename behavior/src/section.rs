//! First-qualifying-section selection for the scroll indicator.
//!
//! The indicator scrolls to the first child of the main content container
//! that is a content section — matched by tag name or by a marker class.
//! The host snapshots the container's children into [`SectionCandidate`]s
//! and asks this module which one, if any, to scroll to.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use crate::consts::{SECTION_CONTAINER_CLASS, SECTION_TAG};

/// A child element of the main content container, reduced to what the
/// qualifying check needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCandidate {
    /// Tag name as reported by the DOM (any case).
    pub tag: String,
    /// The element's classes.
    pub classes: Vec<String>,
}

impl SectionCandidate {
    /// Build a candidate from a tag name and a space-separated class
    /// attribute value.
    #[must_use]
    pub fn new(tag: &str, class_attr: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            classes: class_attr.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Whether this element counts as a content section.
    #[must_use]
    pub fn qualifies(&self) -> bool {
        self.tag.eq_ignore_ascii_case(SECTION_TAG)
            || self.classes.iter().any(|class| class == SECTION_CONTAINER_CLASS)
    }
}

/// Index of the first qualifying candidate in document order, if any.
#[must_use]
pub fn first_qualifying(candidates: &[SectionCandidate]) -> Option<usize> {
    candidates.iter().position(SectionCandidate::qualifies)
}
