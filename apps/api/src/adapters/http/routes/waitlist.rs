//! Waitlist signup routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use waitlist_types::ApiResponse;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

/// POST /api/waitlist
/// Validates the submission and adds it to the waitlist.
/// A body that is not JSON counts as a validation failure.
async fn join_waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let entry = app_state.waitlist_use_cases.join(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}

/// GET /api/waitlist
/// Lists every entry in signup order. Not authenticated.
async fn list_waitlist(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = app_state.waitlist_use_cases.list_entries().await?;

    Ok(Json(ApiResponse::ok(entries)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist).get(list_waitlist))
}
