//! Ingestion-time consecutive-run alerting.

use chrono::{DateTime, Utc};
use interval_engine::{is_consecutive_run, Config as EngineConfig};

use crate::error::StoreError;
use crate::partition;
use crate::store::Session;
use crate::types::{ConsecutiveAlert, Detection};

/// Decide whether a newest-first window of tracked detections forms a
/// consecutive run.
///
/// Fewer than `alert_window` rows is the normal no-alert outcome, not a
/// failure. Only the newest `alert_window` rows are considered.
pub fn evaluate(recent: &[Detection], config: &EngineConfig) -> Option<ConsecutiveAlert> {
  if recent.len() < config.alert_window {
    return None;
  }
  let window = &recent[..config.alert_window];
  let times: Vec<DateTime<Utc>> = window.iter().map(|d| d.time).collect();
  if !is_consecutive_run(&times, config.gap_seconds) {
    return None;
  }
  Some(ConsecutiveAlert {
    message: format!(
      "A person has been detected in {} consecutive intervals",
      config.alert_window
    ),
    window: config.alert_window,
    gap_seconds: config.gap_seconds,
    first: window[window.len() - 1].time,
    last: window[0].time,
  })
}

/// Re-evaluate the alert rule after a successful append: fetch the newest
/// tracked detections and check the run. Runs for every ingested detection
/// regardless of its type; cost is bounded by the window-sized fetch, not
/// total history.
pub async fn check_after_append(
  session: &mut Session<'_>,
  config: &EngineConfig,
) -> Result<Option<ConsecutiveAlert>, StoreError> {
  let recent = session
    .query_recent(partition::ALERT_TYPES, config.alert_window as i64)
    .await?;
  Ok(evaluate(&recent, config))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};

  fn ped(id: i64, offset_secs: i64) -> Detection {
    Detection {
      id,
      time: Utc.with_ymd_and_hms(2023, 8, 10, 18, 30, 0).unwrap() + Duration::seconds(offset_secs),
      kind: "pedestrian".to_string(),
    }
  }

  fn newest_first(mut rows: Vec<Detection>) -> Vec<Detection> {
    rows.reverse();
    rows
  }

  #[test]
  fn no_alert_below_the_window_size() {
    let config = EngineConfig::default();
    let rows = newest_first((0..4).map(|i| ped(i + 1, 30 * i)).collect());
    assert!(evaluate(&rows, &config).is_none());
  }

  #[test]
  fn alert_fires_exactly_once_at_the_fifth_detection() {
    let config = EngineConfig::default();
    let all: Vec<Detection> = (0..5).map(|i| ped(i + 1, 30 * i)).collect();

    for n in 1..=5 {
      // The window the store would return after the nth append.
      let recent = newest_first(all[..n].to_vec());
      let alert = evaluate(&recent, &config);
      if n < 5 {
        assert!(alert.is_none(), "no alert expected after detection {}", n);
      } else {
        let alert = alert.expect("alert after the fifth detection");
        assert_eq!(alert.window, 5);
        assert_eq!(alert.first, all[0].time);
        assert_eq!(alert.last, all[4].time);
      }
    }
  }

  #[test]
  fn sixty_one_second_gap_suppresses_the_alert() {
    let config = EngineConfig::default();
    let rows = newest_first(vec![
      ped(1, 0),
      ped(2, 30),
      ped(3, 91), // 61 s after the previous detection
      ped(4, 121),
      ped(5, 151),
    ]);
    assert!(evaluate(&rows, &config).is_none());
  }

  #[test]
  fn alert_refires_while_the_run_keeps_extending() {
    // Stateless re-evaluation: a sixth consecutive detection raises a fresh
    // alert over the newest five.
    let config = EngineConfig::default();
    let all: Vec<Detection> = (0..6).map(|i| ped(i + 1, 30 * i)).collect();
    let recent = newest_first(all[1..6].to_vec());
    let alert = evaluate(&recent, &config).expect("alert over the newest five");
    assert_eq!(alert.first, all[1].time);
    assert_eq!(alert.last, all[5].time);
  }

  #[test]
  fn untracked_types_never_reach_the_window() {
    // The tracked-set query filters on type, so an interleaved car leaves
    // only four qualifying rows.
    let mixed = vec![
      ped(1, 0),
      Detection {
        id: 2,
        time: Utc.with_ymd_and_hms(2023, 8, 10, 18, 30, 15).unwrap(),
        kind: "car".to_string(),
      },
      ped(3, 30),
      ped(4, 60),
      ped(5, 90),
    ];
    let tracked: Vec<Detection> = mixed
      .into_iter()
      .filter(|d| partition::ALERT_TYPES.contains(&d.kind.as_str()))
      .collect();
    let recent = newest_first(tracked);

    let config = EngineConfig::default();
    assert_eq!(recent.len(), 4);
    assert!(evaluate(&recent, &config).is_none());
  }
}
