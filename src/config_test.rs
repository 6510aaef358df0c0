use super::*;

#[test]
fn missing_base_url_uses_default() {
    assert_eq!(ClientConfig::with_base_url(None).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn blank_base_url_uses_default() {
    assert_eq!(ClientConfig::with_base_url(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_trailing_slashes_trimmed() {
    let cfg = ClientConfig::with_base_url(Some("http://localhost:4000//"));
    assert_eq!(cfg.api_base_url, "http://localhost:4000");
}

#[test]
fn token_lifetimes_are_one_and_seven_days() {
    assert_eq!(ACCESS_TOKEN_TTL.as_secs(), 86_400);
    assert_eq!(REFRESH_TOKEN_TTL.as_secs(), 604_800);
}
