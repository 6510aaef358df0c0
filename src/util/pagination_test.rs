use super::*;

#[test]
fn page_count_rounds_up() {
    let pager = Pager::new(8);
    assert_eq!(pager.page_count(0), 0);
    assert_eq!(pager.page_count(8), 1);
    assert_eq!(pager.page_count(9), 2);
    assert_eq!(pager.page_count(17), 3);
}

#[test]
fn zero_page_size_is_coerced_to_one() {
    assert_eq!(Pager::new(0).per_page, 1);
}

#[test]
fn slice_returns_current_window() {
    let items: Vec<u32> = (1..=20).collect();
    let mut pager = Pager::new(8);
    assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5, 6, 7, 8]);
    pager.next(items.len());
    pager.next(items.len());
    assert_eq!(pager.slice(&items), &[17, 18, 19, 20]);
}

#[test]
fn slice_past_end_is_empty() {
    let items = [1, 2, 3];
    let pager = Pager { page: 5, per_page: 10 };
    assert!(pager.slice(&items).is_empty());
}

#[test]
fn next_stops_on_last_page() {
    let mut pager = Pager::new(10);
    pager.next(15);
    assert_eq!(pager.page, 2);
    pager.next(15);
    assert_eq!(pager.page, 2);
    assert!(!pager.has_next(15));
}

#[test]
fn previous_stops_on_first_page() {
    let mut pager = Pager::new(10);
    pager.previous();
    assert_eq!(pager.page, 1);
    assert!(!pager.has_previous());
}

#[test]
fn controls_only_shown_past_one_page() {
    let pager = Pager::new(8);
    assert!(!pager.is_paginated(8));
    assert!(pager.is_paginated(9));
}

#[test]
fn clamp_pulls_back_after_shrink() {
    let mut pager = Pager { page: 3, per_page: 8 };
    pager.clamp(9);
    assert_eq!(pager.page, 2);
    pager.clamp(0);
    assert_eq!(pager.page, 1);
}
