//! Contiguous-run grouping of ascending detection timestamps.

use chrono::{DateTime, Utc};

use crate::types::Interval;

/// Wall-clock gap between two timestamps in whole seconds.
///
/// The sub-second remainder is truncated, so a 60.9 s gap counts as 60 s.
/// Every gap comparison in this crate goes through here.
pub fn whole_seconds_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
  (later - earlier).num_seconds()
}

/// Fold an ascending timestamp sequence into contiguous intervals.
///
/// Scans once, keeping a current run: a timestamp at most `gap_seconds`
/// after the run's end (inclusive) extends it; a larger gap closes the run
/// and starts a new one at that timestamp. The final run is always emitted,
/// so a single timestamp yields the degenerate interval `(t, t)`. Empty
/// input yields empty output.
///
/// The input must already be sorted ascending; this function does not sort.
pub fn group_intervals(timestamps: &[DateTime<Utc>], gap_seconds: i64) -> Vec<Interval> {
  let (first, rest) = match timestamps.split_first() {
    Some(split) => split,
    None => return Vec::new(),
  };

  let mut intervals = Vec::new();
  let mut current = Interval::point(*first);

  for &ts in rest {
    if whole_seconds_between(current.end, ts) <= gap_seconds {
      current.end = ts;
    } else {
      intervals.push(current);
      current = Interval::point(ts);
    }
  }
  intervals.push(current);
  intervals
}
