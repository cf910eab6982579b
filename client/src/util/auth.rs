//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard sends unauthenticated visits to `/login?redirect=<path>` and the
//! login page sends the user back afterwards. Both sides live here so the
//! parameter name and the safety check stay in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::query::QueryString;

/// Login route path.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the originally requested location.
pub const REDIRECT_PARAM: &str = "redirect";

/// Login URL that returns to `current` after sign-in.
///
/// The login page itself is never recorded as a return target.
pub fn login_redirect_path(current: &str) -> String {
    match safe_return_path(Some(current)) {
        Some(path) if !is_login_path(path) => QueryString::new().push(REDIRECT_PARAM, path).apply(LOGIN_PATH),
        _ => LOGIN_PATH.to_owned(),
    }
}

/// Where to go after a successful login, given the raw `redirect` parameter.
///
/// Only same-origin absolute paths are honoured; anything else lands on `/`.
pub fn post_login_destination(redirect: Option<&str>) -> String {
    match safe_return_path(redirect) {
        Some(path) if !is_login_path(path) => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Join a router pathname and search string into a single location.
///
/// Accepts `search` with or without its leading `?`.
pub fn current_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Accept `raw` only when a browser cannot resolve it to another origin.
///
/// URL parsers drop tabs and newlines and read a backslash as a slash, so
/// control characters and whitespace anywhere, or a backslash in the first
/// segment, are rejected.
fn safe_return_path(raw: Option<&str>) -> Option<&str> {
    let path = raw?.trim();
    let rest = path.strip_prefix('/')?;
    if path.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }
    let first_segment = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if rest.starts_with('/') || first_segment.contains('\\') {
        return None;
    }
    Some(path)
}

fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with("/login?") || path.starts_with("/login/")
}
