//! Narrowing the loaded rows by the active filter controls.

use crate::models::log::log_entry::LogEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
  Success,
  Failure,
}

impl StatusType {
  /// Unknown values yield `None` and disable the status filter.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw {
      "success" => Some(StatusType::Success),
      "failure" => Some(StatusType::Failure),
      other => {
        debug!("ignoring unknown status filter {other:?}");
        None
      }
    }
  }

  pub fn matches(self, row: &LogEntry) -> bool {
    match self {
      StatusType::Success => row.is_success(),
      StatusType::Failure => row.is_failure(),
    }
  }
}

/// Raw query-string form of the filter controls.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
  pub endpoint: Option<String>,
  pub status: Option<String>,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
}

/// Active filters. Absent fields do not narrow the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
  pub endpoint: Option<String>,
  pub status: Option<StatusType>,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
}

/// Trimmed value, or `None` when blank.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
  value
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
}

impl From<FilterQuery> for FilterParams {
  fn from(q: FilterQuery) -> Self {
    FilterParams {
      endpoint: non_empty(q.endpoint),
      status: non_empty(q.status).and_then(|s| StatusType::parse(&s)),
      start_date: non_empty(q.start_date),
      end_date: non_empty(q.end_date),
    }
  }
}

impl FilterParams {
  /// Inclusive string bounds, only when both ends are set.
  fn date_range(&self) -> Option<(&str, &str)> {
    match (self.start_date.as_deref(), self.end_date.as_deref()) {
      (Some(start), Some(end)) => Some((start, end)),
      _ => None,
    }
  }

  pub fn matches(&self, row: &LogEntry) -> bool {
    if let Some(endpoint) = self.endpoint.as_deref() {
      if row.api_endpoint != endpoint {
        return false;
      }
    }
    if let Some(status) = self.status {
      if !status.matches(row) {
        return false;
      }
    }
    if let Some((start, end)) = self.date_range() {
      let ts = row.timestamp.as_str();
      if ts < start || ts > end {
        return false;
      }
    }
    true
  }

  /// Keep matching rows, preserving their order.
  pub fn apply(&self, rows: Vec<LogEntry>) -> Vec<LogEntry> {
    let before = rows.len();
    let kept: Vec<LogEntry> = rows.into_iter().filter(|r| self.matches(r)).collect();
    debug!(before, after = kept.len(), filters = ?self, "applied filters");
    kept
  }
}
