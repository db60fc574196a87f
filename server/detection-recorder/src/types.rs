//! Persisted row model and JSON contract types.

use chrono::{DateTime, NaiveDateTime, Utc};
use interval_engine::Interval;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Persisted model
// ---------------------------------------------------------------------------

/// One persisted detection row. Created by `Session::append`, never updated
/// or deleted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
  /// Store-assigned, unique, monotonic by insertion.
  pub id: i64,
  pub time: DateTime<Utc>,
  /// Category label; stored under the `type` column.
  pub kind: String,
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound detection line from stdin. Unknown fields are silently
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundDetection {
  pub time: String,
  #[serde(rename = "type")]
  pub kind: String,
}

impl InboundDetection {
  /// Parse the inbound timestamp. Full RFC 3339 normalizes to UTC; a naive
  /// `YYYY-MM-DDTHH:MM:SS` form is taken as UTC.
  pub fn parse_time(&self) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&self.time) {
      return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M:%S")
      .ok()
      .map(|naive| naive.and_utc())
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Raised when the newest tracked detections form a consecutive run.
#[derive(Debug, Clone, Serialize)]
pub struct ConsecutiveAlert {
  pub message: String,
  /// How many detections formed the run.
  pub window: usize,
  pub gap_seconds: i64,
  /// Oldest detection in the run.
  pub first: DateTime<Utc>,
  /// Newest detection in the run.
  pub last: DateTime<Utc>,
}

/// Full-history intervals for the two fixed partitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
  pub people: Vec<Interval>,
  pub vehicles: Vec<Interval>,
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
