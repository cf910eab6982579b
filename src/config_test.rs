use super::*;

/// # Safety
/// Only `from_env_reads_defaults_and_overrides` mutates these variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("API_UPSTREAM_URL");
        std::env::remove_var("PROXY_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_reads_defaults_and_overrides() {
    unsafe { clear_host_env() };
    assert_eq!(HostConfig::from_env().unwrap(), HostConfig::default());

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("API_UPSTREAM_URL", " https://api.example.test/ ");
        std::env::set_var("PROXY_TIMEOUT_SECS", "5");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream.as_deref(), Some("https://api.example.test"));
    assert_eq!(cfg.proxy_timeout(), Duration::from_secs(5));

    unsafe { std::env::set_var("PORT", "not-a-port") };
    let err = HostConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".into() });

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_defaults_on_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn normalize_upstream_drops_blank_and_trailing_slashes() {
    assert_eq!(normalize_upstream(None), None);
    assert_eq!(normalize_upstream(Some("   ")), None);
    assert_eq!(normalize_upstream(Some("http://api:8000//")).as_deref(), Some("http://api:8000"));
}
