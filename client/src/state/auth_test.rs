use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: None,
        roles: vec!["recruiter".to_owned()],
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_has_no_user_and_unknown_status() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.status, AuthStatus::Unknown);
}

#[test]
fn auth_state_constructors_set_flags() {
    assert!(AuthState::loading().is_loading());
    let signed_in = AuthState::signed_in(make_user());
    assert!(signed_in.is_authenticated());
    assert_eq!(signed_in.status, AuthStatus::SignedIn);
    let expired = AuthState::signed_out(AuthStatus::Expired);
    assert!(!expired.is_authenticated());
    assert!(!expired.is_loading());
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn loading_renders_spinner_even_with_user() {
    let mut state = AuthState::signed_in(make_user());
    state.loading = true;
    assert_eq!(guard_decision(&state, "/resumes"), GuardDecision::Loading);
    assert_eq!(guard_decision(&AuthState::loading(), "/resumes"), GuardDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_login_with_current_path() {
    let state = AuthState::signed_out(AuthStatus::SignedOut);
    assert_eq!(
        guard_decision(&state, "/resumes/r-7"),
        GuardDecision::Redirect { to: "/login?redirect=%2Fresumes%2Fr-7".to_owned() }
    );
}

#[test]
fn unauthenticated_redirect_keeps_query_string() {
    let state = AuthState::signed_out(AuthStatus::Expired);
    assert_eq!(
        guard_decision(&state, "/weights?page=2"),
        GuardDecision::Redirect { to: "/login?redirect=%2Fweights%3Fpage%3D2".to_owned() }
    );
}

#[test]
fn authenticated_renders_children() {
    let state = AuthState::signed_in(make_user());
    assert_eq!(guard_decision(&state, "/audit"), GuardDecision::Render);
}

// =============================================================
// settle_session
// =============================================================

#[test]
fn settle_session_signs_in_on_success() {
    let state = settle_session(Ok(make_user()), false);
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
}

#[test]
fn settle_session_marks_rejected_token_as_expired() {
    let unauthorized = || ApiError::Status { status: 401, message: "expired".to_owned() };
    assert_eq!(settle_session(Err(unauthorized()), true).status, AuthStatus::Expired);
    assert_eq!(settle_session(Err(unauthorized()), false).status, AuthStatus::SignedOut);
}

#[test]
fn settle_session_other_failures_sign_out() {
    let state = settle_session(Err(ApiError::Transport("offline".to_owned())), true);
    assert_eq!(state.status, AuthStatus::SignedOut);
    assert!(!state.is_authenticated());
}
