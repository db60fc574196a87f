//! Core types for the interval engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A maximal run of detections whose neighbouring gaps stay within the
/// configured threshold. Both endpoints are timestamps of real detections;
/// a run of one yields `start == end`.
///
/// Serializes with RFC 3339 endpoints, so reports round-trip as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
  pub start: DateTime<Utc>,
  pub end: DateTime<Utc>,
}

impl Interval {
  /// Degenerate interval covering a single detection.
  pub fn point(t: DateTime<Utc>) -> Self {
    Self { start: t, end: t }
  }
}
