//! Handlers for the intake endpoints.
//!
//! | Method    | Path      | Notes |
//! |-----------|-----------|-------|
//! | `POST`    | `/submit` | Body: [`NewRecord`] JSON; returns 201 + [`SubmitResponse`] |
//! | `OPTIONS` | `/submit` | 204, empty body |
//! | `GET`     | `/data`   | All records, most recent first |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use floodwatch_core::{
  record::{HealthRecord, NewRecord, RiskTier},
  store::RecordStore,
};
use serde::Serialize;

use crate::error::ApiError;

// ─── Submit ──────────────────────────────────────────────────────────────────

/// JSON body returned by `POST /submit` on success.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub success: bool,
  pub message: String,
  pub risk:    RiskTier,
}

/// `POST /submit` — body: `{village, diarrhea, fever, rainfall}`.
///
/// Returns 201 with the derived risk tier. Any `risk` or `date` field in the
/// body is ignored; both are assigned server-side. A malformed body (missing
/// field, non-numeric count) is captured as a [`JsonRejection`] so it renders
/// the same failure shape as a storage error and creates no record.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  payload: Result<Json<NewRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(input) = payload.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
  input
    .validate()
    .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

  let record = store
    .append(input)
    .await
    .map_err(|e| ApiError::Storage(Box::new(e)))?;

  Ok((
    StatusCode::CREATED,
    Json(SubmitResponse {
      success: true,
      message: "Data submitted successfully".to_string(),
      risk:    record.risk,
    }),
  ))
}

/// `OPTIONS /submit` — 204 with an empty body. The CORS layer decorates the
/// response with the allow headers.
pub async fn preflight() -> StatusCode { StatusCode::NO_CONTENT }

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /data` — all records, most recent first.
///
/// The body is always a JSON array: on a storage failure the status is 500
/// and the array is empty, so dashboard consumers never see an unexpected
/// shape.
pub async fn list<S>(State(store): State<Arc<S>>) -> impl IntoResponse
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match store.list_all().await {
    Ok(records) => (StatusCode::OK, Json(records)),
    Err(e) => {
      tracing::error!(error = %e, "failed to read records");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Vec::<HealthRecord>::new()),
      )
    }
  }
}
