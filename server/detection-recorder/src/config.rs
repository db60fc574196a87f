//! Recorder configuration with sane defaults.

use std::time::Duration;

/// Store-side tunables. The engine-side thresholds (gap, alert window) live
/// in `interval_engine::Config`.
#[derive(Debug, Clone)]
pub struct Config {
  /// Table holding detection rows.
  pub table: String,
  /// Connection attempts before startup fails with `StoreError::Unavailable`.
  pub connect_attempts: u32,
  /// Fixed delay between connection attempts.
  pub connect_delay: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      table: "detections".to_string(),
      connect_attempts: 5,
      connect_delay: Duration::from_secs(5),
    }
  }
}
