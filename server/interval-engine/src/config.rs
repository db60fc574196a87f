//! Engine configuration with sane defaults.

/// Tunable thresholds for interval grouping and consecutive-run detection.
#[derive(Debug, Clone)]
pub struct Config {
  /// Max gap between neighbouring detections in one run, in whole seconds.
  /// The comparison is inclusive: a gap of exactly this many seconds merges.
  pub gap_seconds: i64,
  /// How many recent tracked detections must form a consecutive run before
  /// an alert is raised.
  pub alert_window: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      gap_seconds: 60,
      alert_window: 5,
    }
  }
}
