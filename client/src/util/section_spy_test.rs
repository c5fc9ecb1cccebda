use super::*;

fn spy() -> SectionSpy {
    SectionSpy::new(vec!["dim-sum".to_owned(), "hot-coffee".to_owned(), "pastries".to_owned()])
}

fn offsets() -> Vec<(String, f64)> {
    vec![("dim-sum".to_owned(), 600.0), ("hot-coffee".to_owned(), 1400.0), ("pastries".to_owned(), 2200.0)]
}

// =============================================================
// SectionSpy
// =============================================================

#[test]
fn spy_without_observations_has_no_active_section() {
    assert!(spy().most_visible().is_none());
}

#[test]
fn spy_picks_highest_ratio() {
    let mut s = spy();
    s.observe("dim-sum", 0.2);
    s.observe("hot-coffee", 0.75);
    assert_eq!(s.most_visible(), Some("hot-coffee"));
}

#[test]
fn spy_prefers_earlier_section_on_tie() {
    let mut s = spy();
    s.observe("pastries", 0.5);
    s.observe("hot-coffee", 0.5);
    assert_eq!(s.most_visible(), Some("hot-coffee"));
}

#[test]
fn spy_drops_sections_that_leave_view() {
    let mut s = spy();
    s.observe("dim-sum", 1.0);
    s.observe("dim-sum", 0.0);
    s.observe("pastries", 0.1);
    assert_eq!(s.most_visible(), Some("pastries"));
}

#[test]
fn spy_ignores_unknown_sections() {
    let mut s = spy();
    s.observe("drinks", 1.0);
    assert!(s.most_visible().is_none());
}

// =============================================================
// topmost_passed_section
// =============================================================

#[test]
fn nothing_passed_at_top_of_page() {
    assert!(topmost_passed_section(&offsets(), 0.0).is_none());
}

#[test]
fn section_counts_once_top_reaches_header_line() {
    assert_eq!(topmost_passed_section(&offsets(), 400.0).as_deref(), Some("dim-sum"));
    assert_eq!(topmost_passed_section(&offsets(), 399.0), None);
}

#[test]
fn last_passed_section_wins() {
    assert_eq!(topmost_passed_section(&offsets(), 1300.0).as_deref(), Some("hot-coffee"));
    assert_eq!(topmost_passed_section(&offsets(), 5000.0).as_deref(), Some("pastries"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_y_is_zero_outside_browser() {
    assert!(scroll_y().abs() < f64::EPSILON);
}
