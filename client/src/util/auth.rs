//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior once the session
//! lookup resolves, so the decision lives in `state::auth` and the wiring
//! lives here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, landing_redirect, unauth_redirect};

/// Redirect to `/auth` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = unauth_redirect(&auth.get()) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` as soon as a signed-in user is known.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = landing_redirect(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
