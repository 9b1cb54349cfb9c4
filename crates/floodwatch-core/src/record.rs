//! Record types — the fundamental unit of the Floodwatch store.
//!
//! A health record is an immutable report from one village on one day.
//! Records are never updated or deleted; the store is append-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Rainfall ────────────────────────────────────────────────────────────────

/// Rainfall level reported alongside the symptom counts.
///
/// Only `High` participates in the risk rule; the remaining levels exist so
/// field teams can report what they observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rainfall {
  High,
  Medium,
  Low,
  None,
}

// ─── RiskTier ────────────────────────────────────────────────────────────────

/// The classifier's output. Serialised with the human-readable labels the
/// dashboard displays (`"High Risk"`, `"Medium Risk"`, `"Safe"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
  #[serde(rename = "High Risk")]
  High,
  #[serde(rename = "Medium Risk")]
  Medium,
  Safe,
}

// ─── HealthRecord ────────────────────────────────────────────────────────────

/// A stored submission. Once written, no field is ever updated.
///
/// `id`, `risk`, and `date` are assigned by the store at insert time and are
/// never accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
  /// Store-assigned, monotonically increasing.
  pub id:       i64,
  pub village:  String,
  pub diarrhea: u32,
  pub fever:    u32,
  pub rainfall: Rainfall,
  /// Derived from `diarrhea`/`rainfall` at insert time; never trusted from
  /// input.
  pub risk:     RiskTier,
  /// The server's current date at insert time (`YYYY-MM-DD`).
  pub date:     NaiveDate,
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::RecordStore::append`].
///
/// Deliberately has no `risk` or `date` field: those are always assigned
/// server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecord {
  pub village:  String,
  pub diarrhea: u32,
  pub fever:    u32,
  pub rainfall: Rainfall,
}

impl NewRecord {
  /// Check the constraints the type system cannot express.
  pub fn validate(&self) -> Result<()> {
    if self.village.trim().is_empty() {
      return Err(Error::EmptyVillage);
    }
    Ok(())
  }
}
