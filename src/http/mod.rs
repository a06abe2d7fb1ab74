//! HTTP router and handlers.

use crate::app::AppState;
use axum::{Router, routing::get};

pub mod dashboard;
pub mod logs;
pub mod ui;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::ui_index))
        .route("/health", get(|| async { "ok" }))
        .route("/api/filters", get(dashboard::get_filters))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/logs/:id", get(logs::get_log))
        .route("/detail", get(logs::get_detail))
        .with_state(state)
}
