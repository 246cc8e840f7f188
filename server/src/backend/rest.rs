//! Hosted backend client: token auth plus a PostgREST-style table API.
//!
//! Thin HTTP wrapper. URL construction and response parsing are pure
//! functions so they can be tested without a network.
//!
//! TRADE-OFFS
//! ==========
//! Only connection establishment is bounded; a slow backend holds the
//! request open until it answers.

use std::time::Duration;

use client::net::types::{Profile, User, Workout, WorkoutInput};
use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BackendError, Caller, RecordStore, Session, SessionProvider};
use crate::config::BackendConfig;

// =============================================================================
// URLS
// =============================================================================

pub(crate) fn token_url(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

pub(crate) fn signup_url(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

pub(crate) fn user_url(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

pub(crate) fn logout_url(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

pub(crate) fn profile_url(base: &str, user_id: Uuid) -> String {
    format!("{base}/rest/v1/profiles?id=eq.{user_id}&select=name")
}

pub(crate) fn workouts_url(base: &str, user_id: Uuid) -> String {
    format!("{base}/rest/v1/workouts?select=*&user_id=eq.{user_id}&order=date.desc")
}

pub(crate) fn workouts_insert_url(base: &str) -> String {
    format!("{base}/rest/v1/workouts")
}

pub(crate) fn workout_url(base: &str, id: Uuid, user_id: Uuid) -> String {
    format!("{base}/rest/v1/workouts?id=eq.{id}&user_id=eq.{user_id}")
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the TLS client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_owned(),
            anon_key: config.anon_key.clone(),
        })
    }

    /// Request with the project key; `token` authorizes as a user, otherwise
    /// the anon key doubles as the bearer.
    fn request(&self, method: Method, url: String, token: Option<&str>) -> RequestBuilder {
        let bearer = token.unwrap_or(&self.anon_key);
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {bearer}"))
    }

    /// Send and return the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        classify_status(status, text)
    }
}

/// Map a backend status to the adapter's error taxonomy.
pub(crate) fn classify_status(status: u16, body: String) -> Result<String, BackendError> {
    match status {
        200..=299 => Ok(body),
        401 | 403 => Err(BackendError::Unauthorized),
        _ => Err(BackendError::Response { status, body }),
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct WorkoutRow<'a> {
    #[serde(flatten)]
    input: &'a WorkoutInput,
    user_id: Uuid,
}

#[derive(Deserialize)]
struct AuthUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

impl From<AuthUser> for User {
    fn from(user: AuthUser) -> Self {
        Self { id: user.id, email: user.email.unwrap_or_default() }
    }
}

/// Token endpoint body; sign-up returns the same shape once confirmed, or
/// the bare user while confirmation is pending.
#[derive(Deserialize)]
struct SessionBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, BackendError> {
    serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))
}

pub(crate) fn parse_session(json: &str) -> Result<Session, BackendError> {
    let body: SessionBody = parse_json(json)?;
    match (body.access_token, body.user) {
        (Some(token), Some(user)) => Ok(Session { token, user: user.into() }),
        _ => Err(BackendError::Parse("token response missing access_token or user".into())),
    }
}

pub(crate) fn parse_sign_up(json: &str) -> Result<Session, BackendError> {
    let body: SessionBody = parse_json(json)?;
    match (body.access_token, body.user) {
        (Some(token), Some(user)) => Ok(Session { token, user: user.into() }),
        _ => Err(BackendError::PendingConfirmation),
    }
}

pub(crate) fn parse_user(json: &str) -> Result<User, BackendError> {
    parse_json::<AuthUser>(json).map(User::from)
}

pub(crate) fn parse_profile(json: &str) -> Result<Option<Profile>, BackendError> {
    Ok(parse_json::<Vec<Profile>>(json)?.into_iter().next())
}

pub(crate) fn parse_workouts(json: &str) -> Result<Vec<Workout>, BackendError> {
    parse_json(json)
}

/// First row of a `return=representation` body; empty means nothing matched.
pub(crate) fn parse_single_workout(json: &str) -> Result<Workout, BackendError> {
    parse_workouts(json)?
        .into_iter()
        .next()
        .ok_or(BackendError::NotFound)
}

/// Best human-readable message from an auth error body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.msg.or(e.error_description).or(e.message))
        .unwrap_or_else(|| body.to_owned())
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

#[async_trait::async_trait]
impl SessionProvider for RestBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let request = self
            .request(Method::POST, token_url(&self.base_url), None)
            .json(&PasswordGrant { email, password });
        match self.send(request).await {
            Ok(body) => parse_session(&body),
            // Bad credentials come back as 400 `invalid_grant`.
            Err(BackendError::Response { status: 400, .. }) => Err(BackendError::Unauthorized),
            Err(e) => Err(e),
        }
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session, BackendError> {
        let request = self
            .request(Method::POST, signup_url(&self.base_url), None)
            .json(&SignUpBody { email, password, data: SignUpMetadata { name } });
        match self.send(request).await {
            Ok(body) => parse_sign_up(&body),
            Err(BackendError::Response { status: 400 | 422, body }) => {
                Err(BackendError::InvalidInput(error_message(&body)))
            }
            Err(e) => Err(e),
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        let body = self
            .send(self.request(Method::GET, user_url(&self.base_url), Some(token)))
            .await?;
        parse_user(&body)
    }

    async fn sign_out(&self, token: &str) -> Result<(), BackendError> {
        match self
            .send(self.request(Method::POST, logout_url(&self.base_url), Some(token)))
            .await
        {
            Ok(_) | Err(BackendError::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for RestBackend {
    async fn profile(&self, caller: &Caller) -> Result<Option<Profile>, BackendError> {
        let url = profile_url(&self.base_url, caller.user_id);
        let body = self
            .send(self.request(Method::GET, url, Some(&caller.token)))
            .await?;
        parse_profile(&body)
    }

    async fn list_workouts(&self, caller: &Caller) -> Result<Vec<Workout>, BackendError> {
        let url = workouts_url(&self.base_url, caller.user_id);
        let body = self
            .send(self.request(Method::GET, url, Some(&caller.token)))
            .await?;
        parse_workouts(&body)
    }

    async fn insert_workout(&self, caller: &Caller, input: &WorkoutInput) -> Result<Workout, BackendError> {
        let request = self
            .request(Method::POST, workouts_insert_url(&self.base_url), Some(&caller.token))
            .header("Prefer", "return=representation")
            .json(&[WorkoutRow { input, user_id: caller.user_id }]);
        let body = self.send(request).await?;
        parse_single_workout(&body).map_err(|e| match e {
            BackendError::NotFound => BackendError::Parse("insert returned no rows".into()),
            other => other,
        })
    }

    async fn update_workout(&self, caller: &Caller, id: Uuid, input: &WorkoutInput) -> Result<Workout, BackendError> {
        let request = self
            .request(Method::PATCH, workout_url(&self.base_url, id, caller.user_id), Some(&caller.token))
            .header("Prefer", "return=representation")
            .json(input);
        let body = self.send(request).await?;
        parse_single_workout(&body)
    }

    async fn delete_workout(&self, caller: &Caller, id: Uuid) -> Result<(), BackendError> {
        let request = self
            .request(Method::DELETE, workout_url(&self.base_url, id, caller.user_id), Some(&caller.token))
            .header("Prefer", "return=representation");
        let body = self.send(request).await?;
        parse_single_workout(&body).map(|_| ())
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
