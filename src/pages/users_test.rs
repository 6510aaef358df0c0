use super::*;

fn user(json: serde_json::Value) -> AdminUser {
    serde_json::from_value(json).unwrap()
}

#[test]
fn row_uses_name_then_username() {
    let named = user(serde_json::json!({ "_id": "u1", "name": "Ann", "username": "ann", "email": "a@b.c" }));
    assert_eq!(user_row(&named).0, "Ann");
    let handle_only = user(serde_json::json!({ "_id": "u2", "username": "bob" }));
    assert_eq!(user_row(&handle_only).0, "bob");
}

#[test]
fn missing_values_render_as_na() {
    let bare = user(serde_json::json!({ "_id": "u3", "referral": "  " }));
    assert_eq!(user_row(&bare), ("N/A".to_owned(), "N/A".to_owned(), "N/A".to_owned()));
}

#[test]
fn referral_is_shown_when_present() {
    let referred = user(serde_json::json!({ "id": 7, "name": "Cy", "email": "c@d.e", "referral": "FRIEND10" }));
    assert_eq!(user_row(&referred), ("Cy".to_owned(), "c@d.e".to_owned(), "FRIEND10".to_owned()));
}
