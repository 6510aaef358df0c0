use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_vars(None, Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}
