//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two backend seams and the cookie policy; nothing else is
//! shared between requests.

use std::sync::Arc;

use crate::backend::{RecordStore, SessionProvider};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the adapters are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
    pub store: Arc<dyn RecordStore>,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionProvider>, store: Arc<dyn RecordStore>, cookie_secure: bool) -> Self {
        Self { sessions, store, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
