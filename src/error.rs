//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
    #[error("unknown store kind '{0}' (expected postgres or memory)")]
    UnknownStore(String),
}

/// Server-side failure. Every variant except `NotImplemented` answers 500 with the
/// failure envelope; no 4xx class is distinguished.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Store(String),
    #[error("render: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("{0}: not implemented")]
    NotImplemented(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Config(_) | AppError::Db(_) | AppError::BadRequest(_) | AppError::Store(_) | AppError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.to_string() {
            m if m.trim().is_empty() => "Unknown error occurred".to_string(),
            m => m,
        };
        tracing::warn!(status = status.as_u16(), error = %message, "request failed");
        (status, Json(Envelope::<()>::failure(message))).into_response()
    }
}
