//! logdash library entrypoint.
//!
//! Modules:
//! - `app`: startup, shared state, seeding entry point
//! - `cli`: command-line arguments
//! - `dashboard`: filtering, KPI counts, trend buckets, row details
//! - `db`: connections, migrations and SQLite helpers
//! - `errors`: error taxonomy and HTTP mapping
//! - `http`: Axum router and handlers
//! - `models`: typed records used across layers
//! - `seed`: synthetic log rows
//! - `store`: read access to the log table
//! - `util`: tracing and HTML escaping

pub mod app;
pub mod cli;
pub mod dashboard;
pub mod db;
pub mod errors;
pub mod http;
pub mod models;
pub mod seed;
pub mod store;
pub mod util;
