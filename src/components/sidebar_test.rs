use super::*;

#[test]
fn dashboard_index_highlights_categories() {
    assert_eq!(active_href("/dashboard"), Some("/dashboard/categories"));
    assert_eq!(active_href("/dashboard/"), Some("/dashboard/categories"));
}

#[test]
fn exact_section_paths_highlight_their_entry() {
    assert_eq!(active_href("/dashboard/users"), Some("/dashboard/users"));
    assert_eq!(active_href("/dashboard/cards"), Some("/dashboard/cards"));
}

#[test]
fn unknown_paths_highlight_nothing() {
    assert_eq!(active_href("/login"), None);
    assert_eq!(active_href("/dashboard/usersx"), None);
}
