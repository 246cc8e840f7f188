//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the landing page to coordinate redirects between
//! `/`, `/auth` and `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

pub const LANDING_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the initial session lookup has resolved.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the outcome of a session lookup.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}

/// Where the landing page should send a visitor: signed-in users go to the
/// dashboard, everyone else stays put.
#[must_use]
pub fn landing_redirect(state: &AuthState) -> Option<&'static str> {
    state.user.as_ref().map(|_| DASHBOARD_PATH)
}

/// Where a guarded page should send a visitor once the session lookup has
/// resolved without a user.
#[must_use]
pub fn unauth_redirect(state: &AuthState) -> Option<&'static str> {
    (!state.loading && state.user.is_none()).then_some(AUTH_PATH)
}
