use super::*;

// =============================================================
// Records
// =============================================================

#[test]
fn category_prefers_object_id_over_id() {
    let cat: Category = serde_json::from_value(serde_json::json!({
        "_id": "664f", "id": 3, "name": "Cars", "listings": []
    }))
    .unwrap();
    assert_eq!(cat.key(), Some("664f"));
    assert_eq!(cat.label(), "Cars");
}

#[test]
fn category_accepts_numeric_id_and_missing_fields() {
    let cat: Category = serde_json::from_value(serde_json::json!({ "id": 7 })).unwrap();
    assert_eq!(cat.key(), Some("7"));
    assert_eq!(cat.label(), "Untitled category");
    assert!(cat.listings.is_empty());
}

#[test]
fn category_with_null_fields_still_decodes() {
    let cat: Category =
        serde_json::from_value(serde_json::json!({ "_id": null, "name": null, "image": null })).unwrap();
    assert_eq!(cat.key(), None);
}

#[test]
fn null_lists_read_as_empty() {
    let cat: Category = serde_json::from_value(serde_json::json!({
        "_id": "c1", "listings": [{ "_id": "l1", "images": null }]
    }))
    .unwrap();
    assert!(cat.listings[0].images.is_empty());

    let bare: Category = serde_json::from_value(serde_json::json!({ "_id": "c2", "listings": null })).unwrap();
    assert!(bare.listings.is_empty());
}

#[test]
fn count_accepts_numbers_and_numeric_strings() {
    let count_of = |v: serde_json::Value| {
        serde_json::from_value::<Category>(serde_json::json!({ "_id": "c1", "count": v })).unwrap().count
    };
    assert_eq!(count_of(serde_json::json!(4)), Some(4));
    assert_eq!(count_of(serde_json::json!(" 3 ")), Some(3));
    assert_eq!(count_of(serde_json::json!("many")), None);
    assert_eq!(count_of(serde_json::json!(-1)), None);
    assert_eq!(count_of(serde_json::Value::Null), None);
}

#[test]
fn listing_reads_camel_case_referral_link() {
    let listing: Listing = serde_json::from_value(serde_json::json!({
        "_id": "l1",
        "name": "Cabin",
        "referralLink": "https://example.com/r",
        "images": ["https://cdn/1.jpg"]
    }))
    .unwrap();
    assert_eq!(listing.referral_link.as_deref(), Some("https://example.com/r"));
    assert_eq!(listing.images.len(), 1);
}

#[test]
fn user_label_falls_back_to_username_then_na() {
    let named: AdminUser = serde_json::from_value(serde_json::json!({ "name": "Ana", "username": "ana1" })).unwrap();
    let handle: AdminUser = serde_json::from_value(serde_json::json!({ "username": "ana1" })).unwrap();
    let blank: AdminUser = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(named.label(), "Ana");
    assert_eq!(handle.label(), "ana1");
    assert_eq!(blank.label(), "N/A");
}

#[test]
fn rejects_object_as_id() {
    let err = serde_json::from_value::<Blog>(serde_json::json!({ "_id": { "$oid": "x" } }));
    assert!(err.is_err());
}

// =============================================================
// Collections
// =============================================================

#[test]
fn decode_collection_accepts_bare_array() {
    let blogs: Vec<Blog> = decode_collection(r#"[{"_id":"b1","title":"Hello"}]"#).unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].label(), "Hello");
}

#[test]
fn decode_collection_accepts_data_envelope() {
    let users: Vec<AdminUser> = decode_collection(r#"{"status":200,"data":[{"_id":"u1"},{"_id":"u2"}]}"#).unwrap();
    assert_eq!(users.len(), 2);
}

#[test]
fn decode_collection_keeps_documents_with_null_lists() {
    let cats: Vec<Category> =
        decode_collection(r#"[{"_id":"c1","name":"Cars","listings":null,"count":"3"},{"_id":"c2","name":"Boats"}]"#)
            .unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].count, Some(3));
    assert!(cats[0].listings.is_empty());
}

#[test]
fn decode_collection_rejects_other_shapes() {
    assert!(matches!(decode_collection::<Blog>(r#"{"items":[]}"#), Err(ApiError::Decode(_))));
    assert!(matches!(decode_collection::<Blog>("42"), Err(ApiError::Decode(_))));
    assert!(matches!(decode_collection::<Blog>("not json"), Err(ApiError::Decode(_))));
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn signup_request_omits_missing_referral() {
    let req = SignupRequest {
        name: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        referral: None,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "name": "Ana", "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn login_outcome_with_both_tokens() {
    let outcome = LoginOutcome::from_body(r#"{"accessToken":"t1","refreshToken":"r1"}"#).unwrap();
    assert_eq!(
        outcome,
        LoginOutcome::Tokens(AuthTokens { access: "t1".to_owned(), refresh: Some("r1".to_owned()) })
    );
}

#[test]
fn login_outcome_with_single_token_field_variants() {
    for key in ["token", "accessToken", "access_token"] {
        let body = serde_json::json!({ key: "t1" });
        assert_eq!(
            LoginOutcome::from_value(&body).unwrap(),
            LoginOutcome::Tokens(AuthTokens { access: "t1".to_owned(), refresh: None }),
            "field {key}"
        );
    }
}

#[test]
fn login_outcome_ignores_refresh_without_access() {
    let body = serde_json::json!({ "refreshToken": "r1", "token": "t1" });
    assert_eq!(
        LoginOutcome::from_value(&body).unwrap(),
        LoginOutcome::Tokens(AuthTokens { access: "t1".to_owned(), refresh: None })
    );
}

#[test]
fn login_outcome_empty_token_counts_as_absent() {
    let body = serde_json::json!({ "token": "" });
    assert_eq!(LoginOutcome::from_value(&body), Err(ApiError::MissingToken));
}

#[test]
fn login_outcome_whitespace_token_counts_as_absent() {
    let err = LoginOutcome::from_body(r#"{"accessToken":"  "}"#).unwrap_err();
    assert_eq!(err.to_string(), "Login successful but no authentication token received");
}

#[test]
fn login_outcome_success_flag_without_token() {
    let flagged = serde_json::json!({ "success": true });
    let messaged = serde_json::json!({ "message": "Login successful" });
    assert_eq!(LoginOutcome::from_value(&flagged).unwrap(), LoginOutcome::AcceptedWithoutToken);
    assert_eq!(LoginOutcome::from_value(&messaged).unwrap(), LoginOutcome::AcceptedWithoutToken);
}

#[test]
fn login_outcome_without_token_or_success_is_error() {
    let err = LoginOutcome::from_body(r#"{"user":{"email":"a@b.com"}}"#).unwrap_err();
    assert_eq!(err.to_string(), "Login successful but no authentication token received");
}

#[test]
fn login_outcome_empty_body_is_error() {
    assert_eq!(LoginOutcome::from_body("  "), Err(ApiError::EmptyResponse));
}
