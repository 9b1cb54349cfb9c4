//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `floodwatch-store-sqlite`). The API layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::record::{HealthRecord, NewRecord};

/// Abstraction over a Floodwatch record store backend.
///
/// The store is append-only: records are never updated or deleted after
/// insert. Implementations derive `risk` from the input counts, stamp `date`
/// from the server clock, and assign a monotonically increasing `id` —
/// callers supply none of the three.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new submission and return the stored record, including the
  /// assigned `id`, derived `risk`, and stamped `date`.
  fn append(
    &self,
    input: NewRecord,
  ) -> impl Future<Output = Result<HealthRecord, Self::Error>> + Send + '_;

  /// All records, most recent first (descending id). No filtering.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<HealthRecord>, Self::Error>> + Send + '_;
}
