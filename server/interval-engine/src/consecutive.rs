//! Consecutive-run check over a newest-first detection window.

use chrono::{DateTime, Utc};

use crate::group::whole_seconds_between;

/// True when every adjacent pair in a newest-first window is at most
/// `gap_seconds` apart (inclusive, whole-second truncation).
///
/// Windows of zero or one timestamps are trivially consecutive; callers
/// enforce their own minimum window size before treating `true` as an
/// alert condition.
pub fn is_consecutive_run(newest_first: &[DateTime<Utc>], gap_seconds: i64) -> bool {
  newest_first
    .windows(2)
    .all(|pair| whole_seconds_between(pair[1], pair[0]) <= gap_seconds)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn ts(min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 10, 18, min, sec).unwrap()
  }

  fn newest_first(times: &[DateTime<Utc>]) -> Vec<DateTime<Utc>> {
    let mut v = times.to_vec();
    v.reverse();
    v
  }

  #[test]
  fn run_of_five_within_gap_is_consecutive() {
    let times = newest_first(&[ts(30, 0), ts(30, 30), ts(31, 0), ts(31, 30), ts(32, 0)]);
    assert!(is_consecutive_run(&times, 60));
  }

  #[test]
  fn gaps_of_exactly_sixty_seconds_count() {
    let times = newest_first(&[ts(30, 0), ts(31, 0), ts(32, 0), ts(33, 0), ts(34, 0)]);
    assert!(is_consecutive_run(&times, 60));
  }

  #[test]
  fn one_sixty_one_second_gap_breaks_the_run() {
    let times = newest_first(&[ts(30, 0), ts(30, 30), ts(31, 31), ts(32, 0), ts(32, 30)]);
    assert!(!is_consecutive_run(&times, 60));
  }

  #[test]
  fn identical_timestamps_are_consecutive() {
    let t = ts(30, 0);
    assert!(is_consecutive_run(&[t, t, t], 60));
  }

  #[test]
  fn short_windows_are_trivially_consecutive() {
    assert!(is_consecutive_run(&[], 60));
    assert!(is_consecutive_run(&[ts(30, 0)], 60));
  }
}
