//! Country handlers: list, create, and the unimplemented delete-by-id.

use crate::error::AppError;
use crate::model::NewCountry;
use crate::response::success;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

/// GET /api/countries: all countries ordered by name.
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.store.list().await?;
    Ok(success(rows))
}

/// POST /api/countries: insert `{country}` and return the stored row.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCountry>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let row = state.store.create(&body.country).await?;
    Ok(success(row))
}

/// DELETE /api/countries/:id is referenced by the list page, never backed by a statement.
// TODO: decide missing-id semantics (idempotent vs error) before wiring a DELETE statement.
pub async fn delete(id: Result<Path<i32>, PathRejection>) -> Result<Json<()>, AppError> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Err(AppError::NotImplemented(format!("delete country {}", id)))
}
