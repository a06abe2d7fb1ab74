//! Dashboard JSON APIs.

use crate::{
  app::AppState,
  dashboard::{
    self, DashboardView, FilterOptions,
    filter::{FilterParams, FilterQuery},
  },
  errors::DashboardError,
  store::LogSource,
};
use axum::{
  Json,
  extract::{Query, State},
};
use tracing::debug;

pub async fn get_filters(State(state): State<AppState>) -> Result<Json<FilterOptions>, DashboardError> {
  let rows = state.logs.load_all().await?;
  Ok(Json(dashboard::filter_options(&rows)))
}

pub async fn get_dashboard(
  State(state): State<AppState>,
  Query(query): Query<FilterQuery>,
) -> Result<Json<DashboardView>, DashboardError> {
  let params = FilterParams::from(query);
  let view = dashboard::build_dashboard(&state.logs, &params).await?;
  debug!(
    total = view.kpis.total,
    success = view.kpis.success,
    failure = view.kpis.failure,
    "dashboard refreshed"
  );
  Ok(Json(view))
}
