//! JSON intake API for Floodwatch.
//!
//! Exposes an axum [`Router`] backed by any
//! [`floodwatch_core::store::RecordStore`]. CORS, tracing, and static-asset
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(floodwatch_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod records;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use floodwatch_core::store::RecordStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/submit",
      post(records::submit::<S>).options(records::preflight),
    )
    .route("/data", get(records::list::<S>))
    .with_state(store)
}
