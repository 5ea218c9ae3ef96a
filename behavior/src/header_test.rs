use super::*;

#[test]
fn top_of_page_is_top_state() {
    assert_eq!(HeaderState::for_scroll_y(0.0), HeaderState::Top);
}

#[test]
fn threshold_exactly_is_still_top() {
    assert_eq!(HeaderState::for_scroll_y(20.0), HeaderState::Top);
    assert!(!HeaderState::for_scroll_y(20.0).is_scrolled());
}

#[test]
fn one_past_threshold_is_scrolled() {
    assert_eq!(HeaderState::for_scroll_y(21.0), HeaderState::Scrolled);
    assert!(HeaderState::for_scroll_y(21.0).is_scrolled());
}

#[test]
fn fractional_positions_just_past_threshold_are_scrolled() {
    assert_eq!(HeaderState::for_scroll_y(20.1), HeaderState::Scrolled);
}

#[test]
fn deep_scroll_is_scrolled() {
    assert_eq!(HeaderState::for_scroll_y(4000.0), HeaderState::Scrolled);
}

#[test]
fn default_state_is_top() {
    assert_eq!(HeaderState::default(), HeaderState::Top);
}
