//! Backend adapters: session provider and record store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication and workout persistence live outside this process. Route
//! handlers talk to them only through the two traits below, held as
//! `Arc<dyn ...>` in `AppState`.
//!
//! ARCHITECTURE
//! ============
//! - `rest`: a hosted auth service plus a PostgREST-style table API.
//! - `memory`: an in-process stand-in used for local runs and route tests.

pub mod memory;
pub mod rest;

use client::net::types::{Profile, User, Workout, WorkoutInput};
use uuid::Uuid;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend adapter operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The session token is missing, expired, or the credentials were rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// No record with the requested id exists for the caller.
    #[error("record not found")]
    NotFound,

    /// Sign-up succeeded but the account must confirm its e-mail first.
    #[error("e-mail confirmation pending")]
    PendingConfirmation,

    /// The backend rejected the submitted values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP request to the backend could not be completed.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TYPES
// =============================================================================

/// Identity attached to every record-store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub token: String,
    pub user_id: Uuid,
}

impl Caller {
    #[must_use]
    pub fn new(token: impl Into<String>, user: &User) -> Self {
        Self { token: token.into(), user_id: user.id }
    }
}

/// A session established at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// =============================================================================
// TRAITS
// =============================================================================

/// Authentication provider. Tokens are opaque bearer strings.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Exchange e-mail and password for a session.
    ///
    /// # Errors
    ///
    /// [`BackendError::Unauthorized`] for rejected credentials; transport
    /// variants when the provider cannot answer.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Register a new account and open a session for it.
    ///
    /// # Errors
    ///
    /// [`BackendError::PendingConfirmation`] when the provider created the
    /// account without a session; [`BackendError::InvalidInput`] when it
    /// refused the values.
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Resolve a token to its user.
    ///
    /// # Errors
    ///
    /// [`BackendError::Unauthorized`] when the token is unknown or expired.
    async fn current_user(&self, token: &str) -> Result<User, BackendError>;

    /// Revoke a token.
    ///
    /// # Errors
    ///
    /// Transport variants only; unknown tokens are not an error.
    async fn sign_out(&self, token: &str) -> Result<(), BackendError>;
}

/// Profile and workout tables, scoped to the caller.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// # Errors
    ///
    /// [`BackendError::Unauthorized`] or transport variants.
    async fn profile(&self, caller: &Caller) -> Result<Option<Profile>, BackendError>;

    /// The caller's workouts, date descending.
    ///
    /// # Errors
    ///
    /// [`BackendError::Unauthorized`] or transport variants.
    async fn list_workouts(&self, caller: &Caller) -> Result<Vec<Workout>, BackendError>;

    /// Insert a workout tagged with the caller's user id.
    ///
    /// # Errors
    ///
    /// [`BackendError::InvalidInput`] when the record invariants fail.
    async fn insert_workout(&self, caller: &Caller, input: &WorkoutInput) -> Result<Workout, BackendError>;

    /// Overwrite the fields of one existing workout.
    ///
    /// # Errors
    ///
    /// [`BackendError::NotFound`] when `id` is not one of the caller's records.
    async fn update_workout(&self, caller: &Caller, id: Uuid, input: &WorkoutInput) -> Result<Workout, BackendError>;

    /// Remove exactly one workout.
    ///
    /// # Errors
    ///
    /// [`BackendError::NotFound`] when `id` is not one of the caller's records.
    async fn delete_workout(&self, caller: &Caller, id: Uuid) -> Result<(), BackendError>;
}
