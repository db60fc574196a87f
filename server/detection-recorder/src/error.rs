//! Structured error types for the store layer.

use thiserror::Error;

/// Store failures, surfaced typed to the immediate caller. Nothing at this
/// layer is logged-and-ignored, and nothing is retried except the initial
/// connect (which owns the retry budget).
#[derive(Debug, Error)]
pub enum StoreError {
  /// Connection could not be established within the retry budget. Fatal at
  /// startup.
  #[error("store unavailable after {attempts} connection attempts")]
  Unavailable {
    attempts: u32,
    #[source]
    source: sqlx::Error,
  },

  /// An append, commit, or schema statement failed. The caller decides
  /// whether to retry the single event.
  #[error("write: {0}")]
  Write(#[source] sqlx::Error),

  /// A read failed. No partial or degraded result is synthesized.
  #[error("query: {0}")]
  Query(#[source] sqlx::Error),
}
