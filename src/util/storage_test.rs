use super::*;

// =============================================================
// Cookie format
// =============================================================

#[test]
fn format_cookie_sets_max_age_path_and_same_site() {
    let raw = format_cookie("accessToken", "t1", Some(Duration::from_secs(86_400)), false);
    assert!(raw.starts_with("accessToken=t1"), "{raw}");
    assert!(raw.contains("Max-Age=86400"), "{raw}");
    assert!(raw.contains("Path=/"), "{raw}");
    assert!(raw.contains("SameSite=Strict"), "{raw}");
    assert!(!raw.contains("Secure"), "{raw}");
}

#[test]
fn format_cookie_marks_secure_on_https() {
    let raw = format_cookie("accessToken", "t1", None, true);
    assert!(raw.contains("Secure"), "{raw}");
    assert!(!raw.contains("Max-Age"), "{raw}");
}

#[test]
fn format_cookie_zero_ttl_expires_immediately() {
    let raw = format_cookie("refreshToken", "", Some(Duration::ZERO), false);
    assert!(raw.contains("Max-Age=0"), "{raw}");
}

#[test]
fn format_cookie_percent_encodes_separators() {
    let raw = format_cookie("accessToken", "a b;c", None, false);
    assert!(!raw.starts_with("accessToken=a b;c"), "{raw}");
    assert_eq!(find_cookie(raw.split(';').next().unwrap_or_default(), "accessToken").as_deref(), Some("a b;c"));
}

#[test]
fn find_cookie_picks_named_entry() {
    let header = "theme=dark; accessToken=abc123; refreshToken=r1";
    assert_eq!(find_cookie(header, "accessToken").as_deref(), Some("abc123"));
    assert_eq!(find_cookie(header, "refreshToken").as_deref(), Some("r1"));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[test]
fn find_cookie_on_empty_header_is_none() {
    assert_eq!(find_cookie("", "accessToken"), None);
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc", None).unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
    storage.remove("token").unwrap();
    assert_eq!(storage.get("token").unwrap(), None);
}

#[test]
fn memory_storage_expires_after_ttl() {
    let storage = MemoryStorage::new();
    storage.set("accessToken", "t1", Some(Duration::from_secs(60))).unwrap();
    storage.advance(Duration::from_secs(59));
    assert_eq!(storage.get("accessToken").unwrap().as_deref(), Some("t1"));
    storage.advance(Duration::from_secs(1));
    assert_eq!(storage.get("accessToken").unwrap(), None);
    assert_eq!(storage.ttl_of("accessToken"), None);
}

#[test]
fn memory_storage_reports_ttl_of_live_entries() {
    let storage = MemoryStorage::new();
    storage.set("refreshToken", "r1", Some(Duration::from_secs(10))).unwrap();
    storage.set("token", "t1", None).unwrap();
    assert_eq!(storage.ttl_of("refreshToken"), Some(Duration::from_secs(10)));
    assert_eq!(storage.ttl_of("token"), None);
}

#[test]
fn unavailable_memory_storage_rejects_every_call() {
    let storage = MemoryStorage::unavailable();
    assert!(matches!(storage.get("token"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.set("token", "x", None), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove("token"), Err(StorageError::Unavailable(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_backends_are_unavailable_off_browser() {
    assert!(CookieStorage.get("accessToken").is_err());
    assert!(LocalStorage.get("token").is_err());
    assert!(LocalStorage.set("token", "x", None).is_err());
}
