//! Shared selectors, class names, and numeric constants for the theme.
//!
//! These form the markup contract with the storefront templates: the theme
//! only ever looks elements up through the selectors below and only ever
//! toggles the state classes below.

// ── Drawer anchors ──────────────────────────────────────────────

/// Button that opens the mobile navigation drawer.
pub const DRAWER_TRIGGER_SELECTOR: &str = "[data-drawer-trigger]";

/// The drawer panel itself.
pub const DRAWER_SELECTOR: &str = "[data-drawer]";

/// Optional page overlay shown behind the open drawer.
pub const DRAWER_OVERLAY_SELECTOR: &str = "[data-drawer-overlay]";

/// Optional close button inside the drawer.
pub const DRAWER_CLOSE_SELECTOR: &str = "[data-drawer-close]";

/// Navigation links inside the drawer; clicking any of them closes it.
pub const DRAWER_LINK_SELECTOR: &str = "a";

// ── Scroll indicator ────────────────────────────────────────────

/// Trigger that scrolls the viewport to the first content section.
pub const SCROLL_INDICATOR_SELECTOR: &str = "[data-scroll-to-next]";

/// Id of the main content container the indicator scrolls within.
pub const MAIN_CONTENT_ID: &str = "MainContent";

/// Tag name that qualifies a child of the main container as a section.
pub const SECTION_TAG: &str = "section";

/// Class that qualifies a child of the main container as a section.
pub const SECTION_CONTAINER_CLASS: &str = "section-container";

// ── Section reveal ──────────────────────────────────────────────

/// Elements opting in to the reveal-on-scroll effect.
pub const REVEAL_SELECTOR: &str = "[data-reveal]";

/// Vertical offset in CSS pixels applied to hidden reveal elements.
pub const REVEAL_OFFSET_PX: f64 = 24.0;

/// Transition declared on reveal elements before they are observed.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Root margin requiring 10% viewport penetration on both vertical edges.
pub const REVEAL_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

/// Id of the injected `<style>` element carrying the visible-state rule.
/// Injection is skipped when an element with this id already exists.
pub const REVEAL_STYLE_ID: &str = "section-reveal-style";

/// Media query for the reduced-motion accessibility preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Header ──────────────────────────────────────────────────────

/// The sticky header element.
pub const HEADER_SELECTOR: &str = ".header-nav";

/// Scroll position in CSS pixels beyond which the header is "scrolled".
/// The boundary value itself still counts as top-of-page.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

// ── State classes ───────────────────────────────────────────────

/// Open state for the drawer panel.
pub const OPEN_CLASS: &str = "is-open";

/// Visible state for the overlay and for revealed sections.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Scrolled state for the header.
pub const SCROLLED_CLASS: &str = "is-scrolled";
