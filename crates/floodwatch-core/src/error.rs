//! Error types for `floodwatch-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("village name must not be empty")]
  EmptyVillage,

  #[error("unknown rainfall level: {0:?}")]
  UnknownRainfall(String),

  #[error("unknown risk tier: {0:?}")]
  UnknownRiskTier(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
