//! Country API and list page routes.

use crate::handlers::{countries_page, country};
use crate::routes::common_routes_with_ready;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::{routing::delete, routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn country_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/countries", get(country::list).post(country::create))
        .route("/api/countries/:id", delete(country::delete))
        .route("/countries", get(countries_page))
        .with_state(state)
}

/// Full application: common + country routes, request tracing and a body size cap.
/// An oversized body is rejected by the JSON extractor, so it answers with the
/// failure envelope like any other malformed body.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(country_routes(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
