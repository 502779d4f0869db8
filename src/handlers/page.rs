//! Server-rendered list page for browsers.

use crate::error::AppError;
use crate::state::AppState;
use crate::view::{render_page, ListView};
use axum::extract::{Query, State};
use axum::response::Html;
use std::collections::HashMap;

/// GET /countries?page=N: one page of the list view, rendered from a fresh store read.
/// A store failure renders the error page rather than an envelope.
pub async fn countries_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut view = ListView::new();
    view.settle(state.store.list().await.map_err(|e| e.to_string()));
    if let Some(page) = params.get("page").and_then(|p| p.parse::<usize>().ok()) {
        view.go_to_page(page);
    }
    Ok(Html(render_page(&view)?))
}
