//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Compiled client assets are served from `/pkg`.

pub mod auth;
pub mod workouts;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, patch, post};
use client::net::types::ApiError;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::BackendError;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Rejection body shared by every API handler: a status plus `{"error": ...}`.
pub(crate) type ApiFailure = (StatusCode, Json<ApiError>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (status, Json(ApiError { error: message.into() }))
}

pub(crate) fn backend_error_to_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
        BackendError::NotFound => StatusCode::NOT_FOUND,
        BackendError::PendingConfirmation => StatusCode::ACCEPTED,
        BackendError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BackendError::Request(_) => StatusCode::SERVICE_UNAVAILABLE,
        BackendError::Response { .. } | BackendError::Parse(_) => StatusCode::BAD_GATEWAY,
        BackendError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log a backend failure and convert it to an API rejection.
pub(crate) fn backend_failure(err: BackendError, action: &'static str) -> ApiFailure {
    let status = backend_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, action, "backend call failed");
    } else {
        tracing::debug!(error = %err, action, "backend call rejected");
    }
    let message = match err {
        BackendError::InvalidInput(reason) => reason,
        BackendError::Unauthorized => "unauthorized".to_owned(),
        BackendError::NotFound => "not found".to_owned(),
        BackendError::PendingConfirmation => "check your email to confirm your account".to_owned(),
        _ => format!("{action} failed"),
    };
    api_error(status, message)
}

// =============================================================================
// ROUTERS
// =============================================================================

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/profile", get(workouts::profile))
        .route("/api/workouts", get(workouts::list_workouts).post(workouts::create_workout))
        .route(
            "/api/workouts/{id}",
            patch(workouts::update_workout).delete(workouts::delete_workout),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
