use std::sync::Arc;

use super::*;
use crate::config::ACCESS_TOKEN_KEY;
use crate::state::session::{AuthTokens, SessionState};
use crate::util::storage::{MemoryStorage, TokenStorage};

fn client_with_session() -> (ApiClient, SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let session = SessionStore::new(storage.clone(), None);
    session.login(&AuthTokens { access: "t1".to_owned(), refresh: None }).unwrap();
    let config = ClientConfig { api_base_url: "https://api.test".to_owned() };
    (ApiClient::new(&config, session.clone()), session, storage)
}

#[test]
fn encode_path_segment_keeps_unreserved() {
    assert_eq!(encode_path_segment("664f1a-b_c.d~"), "664f1a-b_c.d~");
}

#[test]
fn encode_path_segment_escapes_spaces_and_slashes() {
    assert_eq!(encode_path_segment("Sports Cars/4x4"), "Sports%20Cars%2F4x4");
}

#[test]
fn encode_path_segment_escapes_utf8_bytes() {
    assert_eq!(encode_path_segment("é"), "%C3%A9");
}

#[test]
fn mutation_paths_embed_encoded_segments() {
    assert_eq!(edit_category_path("abc"), "/admin/edit-category/abc");
    assert_eq!(add_listing_path("Boats & Jets"), "/admin/add-listing/Boats%20%26%20Jets");
    assert_eq!(delete_path("664f"), "/admin/delete/664f");
}

#[test]
fn url_joins_base_and_path() {
    let (client, _, _) = client_with_session();
    assert_eq!(client.url(CATEGORIES_PATH), "https://api.test/admin/get-all-categories");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn settle_passes_success_body_through() {
    let (client, session, _) = client_with_session();
    assert_eq!(client.settle(200, "[]".to_owned(), true), Ok("[]".to_owned()));
    assert!(session.state().is_authenticated);
}

#[test]
fn settle_auth_failure_clears_session_sitewide() {
    let (client, session, storage) = client_with_session();
    let broadcasts = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = broadcasts.clone();
    session.subscribe(move |s| sink.lock().unwrap().push(s.clone()));

    let err = client.settle(401, String::new(), true).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(session.state(), SessionState::resolved(false));
    assert_eq!(session.token(), None);
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(*broadcasts.lock().unwrap(), vec![SessionState::resolved(false)]);
}

#[test]
fn settle_public_auth_failure_keeps_session() {
    let (client, session, _) = client_with_session();
    let err = client.settle(401, r#"{"message":"Invalid email or password"}"#.to_owned(), false).unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(session.state().is_authenticated);
}

#[test]
fn settle_server_error_keeps_session() {
    let (client, session, _) = client_with_session();
    let err = client.settle(500, String::new(), true).unwrap_err();
    assert_eq!(err.to_string(), "Server error: 500. Please try again");
    assert!(session.state().is_authenticated);
}

#[test]
fn decode_json_reports_decode_errors() {
    assert!(matches!(decode_json::<Listing>("{"), Err(ApiError::Decode(_))));
    let listing: Listing = decode_json(r#"{"_id":"l1","name":"Cabin"}"#).unwrap();
    assert_eq!(listing.name.as_deref(), Some("Cabin"));
}

#[test]
fn only_login_is_sent_with_credentials() {
    assert!(sends_credentials(LOGIN_PATH));
    assert!(!sends_credentials(SIGNUP_PATH));
    assert!(!sends_credentials(CATEGORIES_PATH));
}

#[test]
fn signup_accepts_ok_and_created_only() {
    let reply = |status| Reply { status, body: String::new() };
    assert_eq!(check_signup_status(reply(200)), Ok(()));
    assert_eq!(check_signup_status(reply(201)), Ok(()));
    let err = check_signup_status(reply(204)).unwrap_err();
    assert_eq!(err.to_string(), "Server error: 204. Please try again");
}
