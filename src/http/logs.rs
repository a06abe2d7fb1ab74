//! Single-row detail APIs.

use crate::{
  app::AppState,
  dashboard::{
    detail::{LogDetail, render_detail},
    filter::non_empty,
  },
  errors::DashboardError,
  store::LogSource,
  util::html_escape,
};
use axum::{
  Json,
  extract::{Path, Query, State},
  response::Html,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
  pub id: Option<String>,
}

impl DetailParams {
  /// A blank id means nothing is selected.
  fn selected_id(self) -> Result<Option<i64>, DashboardError> {
    non_empty(self.id)
      .map(|raw| raw.parse::<i64>().map_err(|_| DashboardError::InvalidId(raw)))
      .transpose()
  }
}

async fn find_detail(state: &AppState, id: i64) -> Result<LogDetail, DashboardError> {
  let row = state.logs.find(id).await?.ok_or(DashboardError::NotFound(id))?;
  Ok(LogDetail::from(&row))
}

pub async fn get_log(
  State(state): State<AppState>,
  Path(id): Path<i64>,
) -> Result<Json<LogDetail>, DashboardError> {
  Ok(Json(find_detail(&state, id).await?))
}

/// HTML fragment for the detail panel; the selection prompt when no id is given.
pub async fn get_detail(
  State(state): State<AppState>,
  Query(params): Query<DetailParams>,
) -> Result<Html<String>, DashboardError> {
  let row = match params.selected_id()? {
    Some(id) => Some(state.logs.find(id).await?.ok_or(DashboardError::NotFound(id))?),
    None => None,
  };
  let heading = if row.is_some() { "<h3>Log Details</h3>\n" } else { "" };
  let body = html_escape(&render_detail(row.as_ref()));
  Ok(Html(format!("{heading}<pre>{body}</pre>")))
}
