//! Database helpers: connections, the `api_logs` migration and path handling.

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};

const MAX_CONNECTIONS: u32 = 5;

/// Create the `api_logs` table if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS api_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            api_endpoint TEXT NOT NULL,
            status_code INTEGER NOT NULL,
            request_payload TEXT NULL,
            response_payload TEXT NULL,
            error_message TEXT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Open a pool that may write, creating the database file if missing.
pub async fn connect(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Open a read-only pool. A missing database file is an error, never created.
pub async fn connect_read_only(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(false)
        .read_only(true);
    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Ensure the parent folder of a file-backed sqlx URL exists.
pub fn ensure_sqlite_path(db_url: &str) -> std::io::Result<()> {
    let Some(path_part) = sqlite_file_path(db_url) else {
        return Ok(());
    };
    if let Some(parent) = Path::new(path_part).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// File path of a `sqlite:` URL, or `None` for in-memory and non-SQLite URLs.
fn sqlite_file_path(db_url: &str) -> Option<&str> {
    let rest = db_url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split_once('?').map_or(rest, |(p, _)| p);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}
