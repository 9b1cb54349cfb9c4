//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a submit-path handler.
///
/// The kinds are distinct values so logs (and future callers) can tell a bad
/// submission from an unavailable store; on the wire every failure collapses
/// to `500` with `{"success": false, "message": …}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::InvalidInput(m) => {
        tracing::warn!(reason = %m, "rejected submission");
      }
      ApiError::Storage(e) => {
        tracing::error!(error = %e, "storage failure");
      }
    }

    let body = json!({ "success": false, "message": self.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
  }
}
