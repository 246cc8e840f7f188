//! Profile and workout routes. Every handler is scoped to the cookie's user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{Profile, Workout, WorkoutInput};
use uuid::Uuid;

use super::auth::AuthUser;
use super::{ApiFailure, api_error, backend_failure};
use crate::state::AppState;

/// Reject candidates that break the record invariants before they reach the store.
pub(crate) fn validate_input(input: &WorkoutInput) -> Result<(), ApiFailure> {
    input
        .validate()
        .map_err(|reason| api_error(StatusCode::UNPROCESSABLE_ENTITY, reason))
}

/// `GET /api/profile` — the caller's display profile.
pub async fn profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Profile>, ApiFailure> {
    state
        .store
        .profile(&auth.caller())
        .await
        .map_err(|e| backend_failure(e, "fetch profile"))?
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "profile not found"))
}

/// `GET /api/workouts` — the caller's workouts, newest date first.
pub async fn list_workouts(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Workout>>, ApiFailure> {
    let rows = state
        .store
        .list_workouts(&auth.caller())
        .await
        .map_err(|e| backend_failure(e, "fetch workouts"))?;
    Ok(Json(rows))
}

/// `POST /api/workouts` — insert tagged with the session user.
pub async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<WorkoutInput>,
) -> Result<(StatusCode, Json<Workout>), ApiFailure> {
    validate_input(&input)?;
    let workout = state
        .store
        .insert_workout(&auth.caller(), &input)
        .await
        .map_err(|e| backend_failure(e, "insert workout"))?;
    tracing::debug!(workout_id = %workout.id, user_id = %auth.user.id, "workout inserted");
    Ok((StatusCode::CREATED, Json(workout)))
}

/// `PATCH /api/workouts/{id}` — overwrite one of the caller's workouts.
pub async fn update_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<WorkoutInput>,
) -> Result<StatusCode, ApiFailure> {
    validate_input(&input)?;
    state
        .store
        .update_workout(&auth.caller(), id, &input)
        .await
        .map_err(|e| backend_failure(e, "update workout"))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/workouts/{id}` — remove one of the caller's workouts.
pub async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiFailure> {
    state
        .store
        .delete_workout(&auth.caller(), id)
        .await
        .map_err(|e| backend_failure(e, "delete workout"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "workouts_test.rs"]
mod tests;
