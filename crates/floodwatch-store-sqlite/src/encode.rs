//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings, enums as the same labels they
//! carry on the wire.

use chrono::NaiveDate;
use floodwatch_core::record::{HealthRecord, Rainfall, RiskTier};

use crate::{Error, Result};

// ─── Rainfall ────────────────────────────────────────────────────────────────

pub fn encode_rainfall(r: Rainfall) -> &'static str {
  match r {
    Rainfall::High => "High",
    Rainfall::Medium => "Medium",
    Rainfall::Low => "Low",
    Rainfall::None => "None",
  }
}

pub fn decode_rainfall(s: &str) -> Result<Rainfall> {
  match s {
    "High" => Ok(Rainfall::High),
    "Medium" => Ok(Rainfall::Medium),
    "Low" => Ok(Rainfall::Low),
    "None" => Ok(Rainfall::None),
    other => Err(floodwatch_core::Error::UnknownRainfall(other.to_owned()).into()),
  }
}

// ─── RiskTier ────────────────────────────────────────────────────────────────

pub fn encode_risk(t: RiskTier) -> &'static str {
  match t {
    RiskTier::High => "High Risk",
    RiskTier::Medium => "Medium Risk",
    RiskTier::Safe => "Safe",
  }
}

pub fn decode_risk(s: &str) -> Result<RiskTier> {
  match s {
    "High Risk" => Ok(RiskTier::High),
    "Medium Risk" => Ok(RiskTier::Medium),
    "Safe" => Ok(RiskTier::Safe),
    other => Err(floodwatch_core::Error::UnknownRiskTier(other.to_owned()).into()),
  }
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Counts ──────────────────────────────────────────────────────────────────

pub fn decode_count(n: i64) -> Result<u32> {
  u32::try_from(n).map_err(|_| Error::CountOutOfRange(n))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `health_data` row.
pub struct RawRecord {
  pub id:       i64,
  pub village:  String,
  pub diarrhea: i64,
  pub fever:    i64,
  pub rainfall: String,
  pub risk:     String,
  pub date:     String,
}

impl RawRecord {
  pub fn into_record(self) -> Result<HealthRecord> {
    Ok(HealthRecord {
      id:       self.id,
      village:  self.village,
      diarrhea: decode_count(self.diarrhea)?,
      fever:    decode_count(self.fever)?,
      rainfall: decode_rainfall(&self.rainfall)?,
      risk:     decode_risk(&self.risk)?,
      date:     decode_date(&self.date)?,
    })
  }
}
