//! Binary entrypoint: ingest a detection batch, then print the aggregation.
//!
//! Input is one InboundDetection JSON line per detection on stdin
//! (`{"time": "2023-08-10T18:30:30Z", "type": "pedestrian"}`), or the
//! built-in sample batch with `--sample`. Output lines on stdout are:
//! - A ConsecutiveAlert (when an ingest triggers the alert rule)
//! - An ErrorOutput (when an input line fails to parse)
//! - The final AggregateReport as one JSON object
//!
//! Status and diagnostics go to stderr.

use std::io::{self, BufRead};

use detection_recorder::types::ErrorOutput;
use detection_recorder::{aggregate, alert, Config, InboundDetection, Store};
use interval_engine::Config as EngineConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
  let use_sample = std::env::args().any(|a| a == "--sample");

  let config = Config::default();
  let engine = EngineConfig::default();

  let mut store = Store::connect(&database_url, config).await?;
  store.init_schema().await?;

  let batch = if use_sample {
    sample_batch()
  } else {
    read_stdin_batch()?
  };
  eprintln!("detection-recorder: ingesting {} detections", batch.len());

  let mut session = store.session().await?;
  for inbound in &batch {
    let time = match inbound.parse_time() {
      Some(t) => t,
      None => {
        emit(&ErrorOutput::new(format!(
          "invalid timestamp: {}",
          inbound.time
        )));
        continue;
      }
    };
    session.append(time, &inbound.kind).await?;
    if let Some(alert) = alert::check_after_append(&mut session, &engine).await? {
      emit(&alert);
    }
  }
  session.commit().await?;
  eprintln!("detection-recorder: batch committed");

  let mut session = store.session().await?;
  let report = aggregate::aggregate(&mut session, &engine).await?;
  emit(&report);

  Ok(())
}

/// Write one JSON line to stdout. Stdout is reserved for machine output.
fn emit<T: serde::Serialize>(value: &T) {
  if let Ok(json) = serde_json::to_string(value) {
    println!("{}", json);
  }
}

/// Parse InboundDetection JSON lines from stdin. Blank lines are skipped;
/// unparseable lines produce an ErrorOutput and are dropped, never aborting
/// the batch.
fn read_stdin_batch() -> io::Result<Vec<InboundDetection>> {
  let mut batch = Vec::new();
  for line in io::stdin().lock().lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    match serde_json::from_str(trimmed) {
      Ok(inbound) => batch.push(inbound),
      Err(e) => emit(&ErrorOutput::new(format!("json parse: {}", e))),
    }
  }
  Ok(batch)
}

/// Built-in demo batch: two short pedestrian bursts around one car, dense
/// enough that the second burst trips the consecutive-run alert.
fn sample_batch() -> Vec<InboundDetection> {
  [
    ("2023-08-10T18:30:30Z", "pedestrian"),
    ("2023-08-10T18:31:00Z", "pedestrian"),
    ("2023-08-10T18:31:00Z", "car"),
    ("2023-08-10T18:31:30Z", "pedestrian"),
    ("2023-08-10T18:35:00Z", "pedestrian"),
    ("2023-08-10T18:35:30Z", "pedestrian"),
    ("2023-08-10T18:36:00Z", "pedestrian"),
    ("2023-08-10T18:37:00Z", "pedestrian"),
    ("2023-08-10T18:37:30Z", "pedestrian"),
  ]
  .iter()
  .map(|(time, kind)| InboundDetection {
    time: time.to_string(),
    kind: kind.to_string(),
  })
  .collect()
}
