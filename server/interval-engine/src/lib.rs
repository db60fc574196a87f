//! Detection Interval Engine — deterministic, rule-based.
//!
//! Folds ascending detection timestamps into contiguous intervals under a
//! fixed gap threshold, and checks whether the most recent detections form
//! a consecutive run (the trigger behind ingestion-time alerts).
//!
//! No DB, no network; pure computation over caller-supplied timestamps.

pub mod config;
pub mod consecutive;
pub mod group;
pub mod types;

pub use config::Config;
pub use consecutive::is_consecutive_run;
pub use group::group_intervals;
pub use types::Interval;
