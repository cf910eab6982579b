use super::*;

#[test]
fn from_base_none_is_same_origin() {
    let cfg = ClientConfig::from_base(None);
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.api_url("/v1/audit/logs"), "/v1/audit/logs");
}

#[test]
fn from_base_trims_whitespace_and_trailing_slashes() {
    let cfg = ClientConfig::from_base(Some("  https://api.example.test// "));
    assert_eq!(cfg.api_base, "https://api.example.test");
}

#[test]
fn api_url_joins_with_single_slash() {
    let cfg = ClientConfig::from_base(Some("https://api.example.test/"));
    assert_eq!(cfg.api_url("/v1/file/upload"), "https://api.example.test/v1/file/upload");
    assert_eq!(cfg.api_url("v1/file/upload"), "https://api.example.test/v1/file/upload");
}
