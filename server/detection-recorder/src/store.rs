//! PostgreSQL store gateway: one exclusively-owned connection,
//! transaction-scoped sessions.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Connection, PgConnection, Postgres, Row, Transaction};

use crate::config::Config;
use crate::error::StoreError;
use crate::retry;
use crate::types::Detection;

/// Durable access to the detection table. Owns the single connection; all
/// reads and writes go through a [`Session`].
pub struct Store {
  conn: PgConnection,
  config: Config,
}

impl Store {
  /// Connect with the configured retry budget (fixed delay between
  /// attempts). Exhausting the budget yields `StoreError::Unavailable`,
  /// which is fatal for the caller.
  pub async fn connect(database_url: &str, config: Config) -> Result<Self, StoreError> {
    let attempts = config.connect_attempts;
    let conn = retry::with_retries(attempts, config.connect_delay, || {
      PgConnection::connect(database_url)
    })
    .await
    .map_err(|source| StoreError::Unavailable { attempts, source })?;
    Ok(Self { conn, config })
  }

  /// Idempotently ensure the detection table exists. Safe on every startup.
  pub async fn init_schema(&mut self) -> Result<(), StoreError> {
    let sql = format!(
      "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, time TIMESTAMPTZ NOT NULL, type TEXT NOT NULL)",
      self.config.table
    );
    sqlx::query(&sql)
      .execute(&mut self.conn)
      .await
      .map_err(StoreError::Write)?;
    Ok(())
  }

  /// Open a transaction-scoped unit of work. The session borrows the
  /// connection exclusively; dropping it without [`Session::commit`] rolls
  /// back.
  pub async fn session(&mut self) -> Result<Session<'_>, StoreError> {
    let tx = self.conn.begin().await.map_err(StoreError::Write)?;
    Ok(Session {
      tx,
      table: self.config.table.clone(),
    })
  }
}

/// One unit of work. Appended rows are visible to queries on the same
/// session before commit, because every statement runs inside the session's
/// transaction.
pub struct Session<'c> {
  tx: Transaction<'c, Postgres>,
  table: String,
}

impl Session<'_> {
  /// Persist one detection and return its store-assigned id.
  pub async fn append(&mut self, time: DateTime<Utc>, kind: &str) -> Result<i64, StoreError> {
    let sql = format!(
      "INSERT INTO {} (time, type) VALUES ($1, $2) RETURNING id",
      self.table
    );
    let row = sqlx::query(&sql)
      .bind(time)
      .bind(kind)
      .fetch_one(&mut *self.tx)
      .await
      .map_err(StoreError::Write)?;
    row.try_get(0).map_err(StoreError::Write)
  }

  /// At most `limit` most recent detections whose type is in `types`,
  /// newest first. Ties on `time` break by insertion id, so the order is
  /// deterministic.
  pub async fn query_recent(
    &mut self,
    types: &[&str],
    limit: i64,
  ) -> Result<Vec<Detection>, StoreError> {
    let sql = format!(
      "SELECT id, time, type FROM {} WHERE type = ANY($1) ORDER BY time DESC, id DESC LIMIT $2",
      self.table
    );
    let rows = sqlx::query(&sql)
      .bind(owned(types))
      .bind(limit)
      .fetch_all(&mut *self.tx)
      .await
      .map_err(StoreError::Query)?;
    rows.iter().map(decode).collect()
  }

  /// Every detection whose type is in `types`, across full history, oldest
  /// first.
  pub async fn query_all(&mut self, types: &[&str]) -> Result<Vec<Detection>, StoreError> {
    let sql = format!(
      "SELECT id, time, type FROM {} WHERE type = ANY($1) ORDER BY time ASC, id ASC",
      self.table
    );
    let rows = sqlx::query(&sql)
      .bind(owned(types))
      .fetch_all(&mut *self.tx)
      .await
      .map_err(StoreError::Query)?;
    rows.iter().map(decode).collect()
  }

  /// Make the unit of work durable.
  pub async fn commit(self) -> Result<(), StoreError> {
    self.tx.commit().await.map_err(StoreError::Write)
  }
}

fn owned(types: &[&str]) -> Vec<String> {
  types.iter().map(|t| t.to_string()).collect()
}

fn decode(row: &PgRow) -> Result<Detection, StoreError> {
  Ok(Detection {
    id: row.try_get("id").map_err(StoreError::Query)?,
    time: row.try_get("time").map_err(StoreError::Query)?,
    kind: row.try_get("type").map_err(StoreError::Query)?,
  })
}
