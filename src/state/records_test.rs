use super::*;
use crate::net::types::Blog;

fn blog(id: &str) -> Blog {
    serde_json::from_value(serde_json::json!({ "_id": id, "title": format!("Post {id}") })).unwrap()
}

fn blogs(n: usize) -> Vec<Blog> {
    (1..=n).map(|i| blog(&i.to_string())).collect()
}

#[test]
fn new_collection_starts_loading() {
    let state = CollectionState::<Blog>::new(8);
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(!state.show_pager());
}

#[test]
fn finish_load_stores_items_and_clears_error() {
    let mut state = CollectionState::<Blog>::new(8);
    state.error = Some("old".to_owned());
    state.finish_load(Ok(blogs(3)), None);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.error, None);
}

#[test]
fn finish_load_failure_keeps_previous_items() {
    let mut state = CollectionState::<Blog>::new(8);
    state.finish_load(Ok(blogs(2)), None);
    state.begin_load();
    state.finish_load(Err(ApiError::Network("down".to_owned())), Some("Error fetching users"));
    assert_eq!(state.items.len(), 2);
    assert_eq!(
        state.error.as_deref(),
        Some("Error fetching users: Server connection failed. Please check if the server is running.")
    );
}

#[test]
fn pager_shown_only_past_one_page() {
    let mut state = CollectionState::<Blog>::new(8);
    state.finish_load(Ok(blogs(8)), None);
    assert!(!state.show_pager());
    state.finish_load(Ok(blogs(9)), None);
    assert!(state.show_pager());
}

#[test]
fn page_items_follow_pager() {
    let mut state = CollectionState::<Blog>::new(8);
    state.finish_load(Ok(blogs(10)), None);
    state.next_page();
    let keys: Vec<_> = state.page_items().iter().map(|b| b.key().unwrap_or_default().to_owned()).collect();
    assert_eq!(keys, vec!["9", "10"]);
    state.next_page();
    assert_eq!(state.pager.page, 2);
    state.previous_page();
    assert_eq!(state.pager.page, 1);
}

#[test]
fn remove_drops_record_and_clamps_pager() {
    let mut state = CollectionState::<Blog>::new(8);
    state.finish_load(Ok(blogs(9)), None);
    state.next_page();
    let removed = state.remove("9").unwrap();
    assert_eq!(removed.key(), Some("9"));
    assert_eq!(state.items.len(), 8);
    assert_eq!(state.pager.page, 1);
    assert!(state.remove("9").is_none());
}

#[test]
fn refetch_with_fewer_items_clamps_pager() {
    let mut state = CollectionState::<Blog>::new(8);
    state.finish_load(Ok(blogs(20)), None);
    state.next_page();
    state.next_page();
    state.finish_load(Ok(blogs(5)), None);
    assert_eq!(state.pager.page, 1);
}

#[test]
fn confirm_delete_message_quotes_label() {
    assert_eq!(confirm_delete_message("Cars"), "Are you sure you want to delete \"Cars\"?");
}

#[test]
fn delete_notice_names_the_record_kind() {
    assert_eq!(delete_notice(RecordKind::Category, &Ok(())), "Category deleted successfully.");
    assert_eq!(delete_notice(RecordKind::Listing, &Ok(())), "Listing deleted successfully.");
    assert_eq!(delete_notice(RecordKind::Blog, &Ok(())), "Blog deleted successfully.");
}

#[test]
fn delete_notice_failure_is_generic() {
    let failure = Err(ApiError::server(500, ""));
    assert_eq!(delete_notice(RecordKind::Blog, &failure), DELETE_FAILED_MESSAGE);
}
