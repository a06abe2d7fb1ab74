//! Application setup and runtime.

use crate::{
  cli::{Cli, Command},
  db,
  errors::DashboardError,
  http, seed,
  store::{LogSource, SqliteLogStore},
};
use chrono::Local;
use std::net::SocketAddr;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub logs: SqliteLogStore,
}

/// Dispatch the parsed command line.
pub async fn run(cli: Cli) -> Result<(), DashboardError> {
  crate::util::init_tracing();

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(&cli.database, &cli.addr).await,
    Command::Seed { count } => seed_database(&cli.database, count).await,
  }
}

/// Open the log table read-only and serve the dashboard.
pub async fn serve(database: &str, addr: &str) -> Result<(), DashboardError> {
  let addr: SocketAddr = addr.parse()?;
  let pool = db::connect_read_only(database).await?;
  let state = AppState {
    logs: SqliteLogStore::new(pool),
  };

  // Fail at startup, not on first request, when the table is missing.
  let rows = state.logs.load_all().await?;
  info!("loaded {} log rows from {}", rows.len(), database);

  let app = http::build_router(state);
  info!("dashboard:  http://{}/", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}

/// Create `api_logs` if absent and append `count` synthetic rows.
pub async fn seed_database(database: &str, count: usize) -> Result<(), DashboardError> {
  db::ensure_sqlite_path(database)?;
  let pool = db::connect(database).await?;
  db::run_migrations(&pool).await?;

  let rows = seed::generate(&mut rand::thread_rng(), Local::now().naive_local(), count);
  seed::insert_entries(&pool, &rows).await?;
  pool.close().await;

  info!(count, database, "API Logs created successfully.");
  Ok(())
}
