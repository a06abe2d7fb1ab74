//! Load, filter and aggregate log rows for one dashboard refresh.

use crate::{errors::DashboardError, models::log::log_entry::LogEntry, store::LogSource};
use serde::Serialize;
use std::collections::BTreeSet;

pub mod detail;
pub mod filter;
pub mod kpi;
pub mod trend;

#[cfg(test)]
pub(crate) mod test_rows;

use filter::FilterParams;
use kpi::Kpis;
use trend::TrendBucket;

/// Everything the page needs after a filter change.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
  pub kpis: Kpis,
  pub trend: Vec<TrendBucket>,
  pub rows: Vec<LogEntry>,
}

/// Choices and defaults for the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
  pub endpoints: Vec<String>,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
}

/// Reload every row from `source`, apply `params`, then aggregate.
pub async fn build_dashboard<S: LogSource>(
  source: &S,
  params: &FilterParams,
) -> Result<DashboardView, DashboardError> {
  let rows = params.apply(source.load_all().await?);
  Ok(DashboardView {
    kpis: Kpis::compute(&rows),
    trend: trend::bucketize(&rows),
    rows,
  })
}

/// Sorted distinct endpoints plus the earliest and latest timestamps.
pub fn filter_options(rows: &[LogEntry]) -> FilterOptions {
  let endpoints: BTreeSet<&str> = rows.iter().map(|r| r.api_endpoint.as_str()).collect();
  FilterOptions {
    endpoints: endpoints.into_iter().map(str::to_string).collect(),
    start_date: rows.iter().map(|r| &r.timestamp).min().cloned(),
    end_date: rows.iter().map(|r| &r.timestamp).max().cloned(),
  }
}
