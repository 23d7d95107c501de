//! Error type for `eventforce-store-memory`.
//!
//! Ledger operations report [`eventforce_core::Error`] directly; this type
//! covers importing and exporting snapshots.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unsupported snapshot version {found}, expected {expected}")]
  UnsupportedVersion { found: u32, expected: u32 },

  /// The snapshot would put the ledger in a state no sequence of
  /// operations can reach.
  #[error("inconsistent snapshot: {0}")]
  Inconsistent(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
