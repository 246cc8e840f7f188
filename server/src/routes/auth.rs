//! Auth routes: sign-in, sign-up, session lookup, logout.
//!
//! The provider's session token never reaches page scripts; it lives in an
//! HttpOnly cookie and is resolved to a user on every API request.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{SignInRequest, SignUpRequest, User};
use time::Duration;

use super::{ApiFailure, api_error, backend_failure};
use crate::backend::{BackendError, Caller, Session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl AuthUser {
    #[must_use]
    pub fn caller(&self) -> Caller {
        Caller::new(self.token.clone(), &self.user)
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(api_error(StatusCode::UNAUTHORIZED, "unauthorized"));
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .current_user(token)
            .await
            .map_err(|e| backend_failure(e, "resolve session"))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn signed_in(state: &AppState, jar: CookieJar, session: Session) -> Response {
    let jar = jar.add(session_cookie(session.token, state.cookie_secure));
    (jar, Json(session.user)).into_response()
}

/// `POST /api/auth/sign-in` — exchange credentials for a session cookie.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignInRequest>,
) -> Result<Response, ApiFailure> {
    match state.sessions.sign_in(&body.email, &body.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "signed in");
            Ok(signed_in(&state, jar, session))
        }
        Err(BackendError::Unauthorized) => Err(api_error(StatusCode::UNAUTHORIZED, "Invalid login credentials")),
        Err(e) => Err(backend_failure(e, "sign in")),
    }
}

/// `POST /api/auth/sign-up` — create an account; `202` while the provider
/// waits for e-mail confirmation.
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignUpRequest>,
) -> Result<Response, ApiFailure> {
    if body.name.trim().is_empty() {
        return Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, "name is required"));
    }
    match state.sessions.sign_up(&body.name, &body.email, &body.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "signed up");
            Ok(signed_in(&state, jar, session))
        }
        Err(BackendError::PendingConfirmation) => Ok(StatusCode::ACCEPTED.into_response()),
        Err(e) => Err(backend_failure(e, "sign up")),
    }
}

/// `GET /api/auth/session` — return the current user.
pub async fn session(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — revoke at the provider (best effort), clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();
    if !token.is_empty() {
        if let Err(e) = state.sessions.sign_out(&token).await {
            tracing::warn!(error = %e, "provider sign-out failed");
        }
    }

    let jar = jar.add(cleared_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
