//! Command-line interface.

use clap::{Parser, Subcommand};

pub const DEFAULT_DATABASE: &str = "sqlite://logs.db";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

/// API request log dashboard
#[derive(Debug, Parser)]
#[command(name = "logdash", version, about, long_about = None)]
pub struct Cli {
    /// SQLite database URL holding the `api_logs` table
    #[arg(long, global = true, env = "LOGDASH_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Address the dashboard listens on
    #[arg(long, global = true, env = "LOGDASH_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the dashboard (default)
    Serve,

    /// Create the table if needed and insert synthetic rows
    Seed {
        /// Number of rows to insert
        #[arg(long, default_value_t = crate::seed::DEFAULT_COUNT)]
        count: usize,
    },
}
