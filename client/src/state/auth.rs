//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session bootstrap in `App` and by the login/logout
//! flows. `ProtectedRoute` reads it and projects it onto a [`GuardDecision`];
//! the guard itself owns no state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::ApiError;
use crate::net::types::User;
use crate::util::auth::login_redirect_path;

/// Opaque session status reported by the auth bootstrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Bootstrap has not finished yet.
    #[default]
    Unknown,
    SignedIn,
    SignedOut,
    /// The server rejected a previously valid session.
    Expired,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub status: AuthStatus,
}

impl AuthState {
    /// State while the session bootstrap is in flight.
    pub fn loading() -> Self {
        Self { user: None, loading: true, status: AuthStatus::Unknown }
    }

    /// Settle on a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false, status: AuthStatus::SignedIn }
    }

    /// Settle on no user with the given reason.
    pub fn signed_out(status: AuthStatus) -> Self {
        Self { user: None, loading: false, status }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// What a protected route should render for the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the spinner; render nothing of the protected subtree.
    Loading,
    /// Navigate to the login page, which returns to `to`'s `redirect` afterwards.
    Redirect { to: String },
    /// Render the protected subtree unmodified.
    Render,
}

/// Project `state` onto a guard decision for a visit to `current` (path + query).
pub fn guard_decision(state: &AuthState, current: &str) -> GuardDecision {
    if state.is_loading() {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect { to: login_redirect_path(current) }
    }
}

/// Settle the bootstrap result of `GET /v1/auth/me`.
///
/// A rejected session counts as [`AuthStatus::Expired`] when a token had been
/// stored, otherwise as a plain sign-out. Other failures also sign out.
pub fn settle_session(result: Result<User, ApiError>, had_token: bool) -> AuthState {
    match result {
        Ok(user) => AuthState::signed_in(user),
        Err(e) if e.is_unauthorized() && had_token => AuthState::signed_out(AuthStatus::Expired),
        Err(_) => AuthState::signed_out(AuthStatus::SignedOut),
    }
}
