//! Wire types shared by the browser, the SSR renderer and the server API.
//!
//! DESIGN
//! ======
//! The server links this crate with the `ssr` feature and reuses these
//! structs for its JSON bodies, so the schema is defined exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated caller as reported by `/api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

/// Display profile attached to a user id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
}

/// A single logged workout, as stored by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub exercise: String,
    /// Minutes.
    pub duration: u32,
    pub calories: u32,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

/// Candidate workout fields submitted by the form. Carries no identifier;
/// the store assigns `id` and the server tags `user_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutInput {
    pub exercise: String,
    pub duration: u32,
    pub calories: u32,
    pub date: NaiveDate,
}

impl WorkoutInput {
    /// Check the record invariants: non-blank exercise, duration and
    /// calories of at least 1.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason for the first violated invariant.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.exercise.trim().is_empty() {
            return Err("exercise is required");
        }
        if self.duration < 1 {
            return Err("duration must be at least 1 minute");
        }
        if self.calories < 1 {
            return Err("calories must be at least 1");
        }
        Ok(())
    }
}

impl From<&Workout> for WorkoutInput {
    fn from(workout: &Workout) -> Self {
        Self {
            exercise: workout.exercise.clone(),
            duration: workout.duration,
            calories: workout.calories,
            date: workout.date,
        }
    }
}

/// Credentials posted to `/api/auth/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Credentials posted to `/api/auth/sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Error body returned by the server API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
