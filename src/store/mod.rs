//! Read access to the log table.
//!
//! Every call reads the current table contents; nothing is cached between
//! calls, so callers observe rows written by the seeder (or any other
//! writer) on their next request.

use crate::{errors::DashboardError, models::log::log_entry::LogEntry};
use sqlx::SqlitePool;
use std::future::Future;

const SELECT_COLUMNS: &str = "SELECT id, timestamp, api_endpoint, status_code, request_payload, response_payload, error_message FROM api_logs";

/// Read contract for log rows.
pub trait LogSource {
  /// Every row, in id order.
  fn load_all(&self) -> impl Future<Output = Result<Vec<LogEntry>, DashboardError>> + Send;

  /// One row by id.
  fn find(&self, id: i64) -> impl Future<Output = Result<Option<LogEntry>, DashboardError>> + Send;
}

/// `api_logs` in a SQLite database.
#[derive(Clone)]
pub struct SqliteLogStore {
  pool: SqlitePool,
}

impl SqliteLogStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

impl LogSource for SqliteLogStore {
  async fn load_all(&self) -> Result<Vec<LogEntry>, DashboardError> {
    let rows = sqlx::query_as::<_, LogEntry>(&format!("{SELECT_COLUMNS} ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(rows)
  }

  async fn find(&self, id: i64) -> Result<Option<LogEntry>, DashboardError> {
    let row = sqlx::query_as::<_, LogEntry>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row)
  }
}

/// Rows held in memory, in the order given.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSource {
  rows: Vec<LogEntry>,
}

impl MemoryLogSource {
  pub fn new(rows: Vec<LogEntry>) -> Self {
    Self { rows }
  }
}

impl LogSource for MemoryLogSource {
  async fn load_all(&self) -> Result<Vec<LogEntry>, DashboardError> {
    Ok(self.rows.clone())
  }

  async fn find(&self, id: i64) -> Result<Option<LogEntry>, DashboardError> {
    Ok(self.rows.iter().find(|r| r.id == id).cloned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{db, models::log::new_log_entry::NewLogEntry, seed};

  async fn memory_pool() -> SqlitePool {
    let pool = db::connect("sqlite::memory:").await.expect("connect memory sqlite");
    db::run_migrations(&pool).await.expect("migrate");
    pool
  }

  fn entry(ts: &str, endpoint: &str, status: i64) -> NewLogEntry {
    NewLogEntry {
      timestamp: ts.to_string(),
      api_endpoint: endpoint.to_string(),
      status_code: status,
      request_payload: None,
      response_payload: None,
      error_message: None,
    }
  }

  #[tokio::test]
  async fn load_all_keeps_insertion_order() {
    let pool = memory_pool().await;
    let rows = vec![
      entry("2024-05-02 10:00:00", "/login", 200),
      entry("2024-05-01 09:00:00", "/signup", 500),
      entry("2024-05-03 08:00:00", "/payment", 201),
    ];
    seed::insert_entries(&pool, &rows).await.unwrap();

    let store = SqliteLogStore::new(pool);
    let loaded = store.load_all().await.unwrap();
    let ids: Vec<i64> = loaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(loaded[1].api_endpoint, "/signup");
    assert_eq!(loaded[1].request_payload, None);
  }

  #[tokio::test]
  async fn find_returns_none_for_unknown_id() {
    let pool = memory_pool().await;
    seed::insert_entries(&pool, &[entry("2024-05-02 10:00:00", "/login", 200)])
      .await
      .unwrap();
    let store = SqliteLogStore::new(pool);
    assert_eq!(store.find(1).await.unwrap().map(|r| r.status_code), Some(200));
    assert!(store.find(42).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn missing_table_is_storage_unavailable() {
    let pool = db::connect("sqlite::memory:").await.unwrap();
    let store = SqliteLogStore::new(pool);
    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, DashboardError::StorageUnavailable(_)));
  }
}
