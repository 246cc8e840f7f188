use super::*;
use uuid::Uuid;

fn signed_in() -> AuthState {
    AuthState { user: Some(User { id: Uuid::new_v4(), email: "a@b.com".to_owned() }), loading: false }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn resolve_clears_loading() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// redirects
// =============================================================

#[test]
fn landing_with_session_goes_to_dashboard() {
    assert_eq!(landing_redirect(&signed_in()), Some(DASHBOARD_PATH));
}

#[test]
fn landing_without_session_stays() {
    let mut state = AuthState::pending();
    assert_eq!(landing_redirect(&state), None);
    state.resolve(None);
    assert_eq!(landing_redirect(&state), None);
}

#[test]
fn unauth_redirect_waits_for_lookup() {
    assert_eq!(unauth_redirect(&AuthState::pending()), None);
}

#[test]
fn unauth_redirect_sends_anonymous_to_auth() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert_eq!(unauth_redirect(&state), Some(AUTH_PATH));
}

#[test]
fn unauth_redirect_keeps_signed_in_user() {
    assert_eq!(unauth_redirect(&signed_in()), None);
}
