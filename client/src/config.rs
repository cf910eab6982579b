//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read the host's environment, so the API base URL
//! is baked in at compile time from `RESUME_DESK_API_BASE`. An empty base means
//! requests go to the page origin, where the host proxies `/v1/*` upstream.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time override for the API origin (e.g. `https://api.example.com`).
const API_BASE_ENV: Option<&str> = option_env!("RESUME_DESK_API_BASE");

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash; empty for same-origin requests.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_base(API_BASE_ENV)
    }
}

impl ClientConfig {
    /// Build a config from an optional raw base URL.
    pub fn from_base(raw: Option<&str>) -> Self {
        let api_base = raw.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        Self { api_base }
    }

    /// Join an absolute API path (`/v1/...`) onto the configured base.
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}
