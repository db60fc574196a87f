//! Aggregation facade: full-history intervals per category partition.

use interval_engine::{group_intervals, Config as EngineConfig, Interval};

use crate::error::StoreError;
use crate::partition;
use crate::store::Session;
use crate::types::AggregateReport;

/// Group full history into intervals for both fixed partitions.
///
/// No caching: every call re-scans history through the session. Detection
/// types outside both partitions are left out of the report.
pub async fn aggregate(
  session: &mut Session<'_>,
  config: &EngineConfig,
) -> Result<AggregateReport, StoreError> {
  Ok(AggregateReport {
    people: partition_intervals(session, partition::PEOPLE_TYPES, config).await?,
    vehicles: partition_intervals(session, partition::VEHICLE_TYPES, config).await?,
  })
}

async fn partition_intervals(
  session: &mut Session<'_>,
  types: &[&str],
  config: &EngineConfig,
) -> Result<Vec<Interval>, StoreError> {
  let rows = session.query_all(types).await?;
  let times: Vec<_> = rows.iter().map(|d| d.time).collect();
  Ok(group_intervals(&times, config.gap_seconds))
}
