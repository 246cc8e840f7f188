//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session, fetch
//! and mutation failures degrade to notifications without crashing hydration.
//! No call is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use uuid::Uuid;

use super::types::{Profile, SignInRequest, SignUpRequest, User, Workout};
use crate::state::dashboard::Mutation;

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const PROFILE_ENDPOINT: &str = "/api/profile";
pub const WORKOUTS_ENDPOINT: &str = "/api/workouts";

#[cfg(any(test, feature = "hydrate"))]
fn workout_endpoint(id: Uuid) -> String {
    format!("{WORKOUTS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn mutation_action(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::Insert(_) => "insert workout",
        Mutation::Update { .. } => "update workout",
        Mutation::Delete(_) => "delete workout",
    }
}

/// Pull the server's `{"error": ...}` message out of a failed response body,
/// falling back to a status-based message.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(action: &str, status: u16, body: &str) -> String {
    serde_json::from_str::<super::types::ApiError>(body)
        .map(|e| e.error)
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| request_failed_message(action, status))
}

/// Fetch the current session's user from `/api/auth/session`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with e-mail and password.
///
/// # Errors
///
/// Returns the server's message when the credentials are rejected or the
/// request fails.
pub async fn sign_in(request: &SignInRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message("sign in", status, &body));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Create an account. `Ok(None)` means the provider accepted the sign-up but
/// wants the address confirmed before a session is issued.
///
/// # Errors
///
/// Returns the server's message when the sign-up is rejected or the request
/// fails.
pub async fn sign_up(request: &SignUpRequest) -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 202 {
            return Ok(None);
        }
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message("sign up", status, &body));
        }
        resp.json::<User>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the caller's profile. `None` when absent or on failure.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the caller's workouts, newest date first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_workouts() -> Result<Vec<Workout>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WORKOUTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch workouts", resp.status()));
        }
        resp.json::<Vec<Workout>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send one insert/update/delete to the server.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-success status.
pub async fn apply_mutation(mutation: &Mutation) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let request = match mutation {
            Mutation::Insert(input) => Request::post(WORKOUTS_ENDPOINT)
                .json(input)
                .map_err(|e| e.to_string())?,
            Mutation::Update { id, input } => Request::patch(&workout_endpoint(*id))
                .json(input)
                .map_err(|e| e.to_string())?,
            Mutation::Delete(id) => Request::delete(&workout_endpoint(*id))
                .build()
                .map_err(|e| e.to_string())?,
        };
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message(mutation_action(mutation), status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mutation;
        Err("not available on server".to_owned())
    }
}
