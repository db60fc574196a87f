//! Fixed category partitions for aggregation and alerting.
//!
//! Detection types are an open set; these partitions are closed. A type
//! outside both is still persisted, but never reaches aggregation output.

/// Person-scale detection types (the "people" bucket).
pub const PEOPLE_TYPES: &[&str] = &["pedestrian", "bicycle"];

/// Vehicle-scale detection types (the "vehicles" bucket).
pub const VEHICLE_TYPES: &[&str] = &["car", "truck", "van"];

/// Types whose consecutive runs raise the ingestion-time alert.
pub const ALERT_TYPES: &[&str] = PEOPLE_TYPES;
