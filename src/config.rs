//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the remote API, without a trailing slash. `None` disables proxying.
    pub api_upstream: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: remote API base; `/v1/*` answers 502 when absent
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_upstream = normalize_upstream(std::env::var("API_UPSTREAM_URL").ok().as_deref());
        let proxy_timeout_secs = env_parse_u64("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS);
        Ok(Self { port, api_upstream, proxy_timeout_secs })
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_secs)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, api_upstream: None, proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: v.to_string() }),
    }
}

fn normalize_upstream(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
