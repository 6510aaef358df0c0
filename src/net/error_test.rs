use super::*;

#[test]
fn network_error_shows_connection_message() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.to_string(), NETWORK_FAILURE_MESSAGE);
}

#[test]
fn server_error_passes_body_message_through() {
    let err = ApiError::server(400, r#"{"message":"Invalid email or password"}"#);
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn server_error_uses_error_field_as_detail() {
    let err = ApiError::server(500, r#"{"error":"db down"}"#);
    assert_eq!(err.to_string(), "Server error: 500. db down");
}

#[test]
fn server_error_falls_back_for_non_json_body() {
    let err = ApiError::server(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "Server error: 502. Please try again");
}

#[test]
fn server_error_ignores_blank_message() {
    let err = ApiError::server(500, r#"{"message":"  "}"#);
    assert_eq!(err.to_string(), "Server error: 500. Please try again");
}

#[test]
fn classify_accepts_any_2xx() {
    assert_eq!(classify_response(200, "a".to_owned(), true), Ok("a".to_owned()));
    assert_eq!(classify_response(201, String::new(), true), Ok(String::new()));
    assert_eq!(classify_response(204, String::new(), false), Ok(String::new()));
}

#[test]
fn classify_maps_auth_failures_on_session_bound_calls() {
    assert_eq!(classify_response(401, String::new(), true), Err(ApiError::Unauthorized { status: 401 }));
    assert_eq!(classify_response(403, String::new(), true), Err(ApiError::Unauthorized { status: 403 }));
}

#[test]
fn classify_passes_auth_failures_through_on_public_calls() {
    let err = classify_response(401, r#"{"message":"Invalid credentials"}"#.to_owned(), false).unwrap_err();
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn missing_token_message_matches_login_copy() {
    assert_eq!(ApiError::MissingToken.to_string(), "Login successful but no authentication token received");
}
