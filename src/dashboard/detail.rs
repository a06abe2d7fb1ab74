//! Detail panel for a single selected log row.

use crate::models::log::log_entry::LogEntry;
use serde::Serialize;

pub const NO_SELECTION_PROMPT: &str = "Select a log row to see full details.";

const EMPTY_PAYLOAD: &str = "{}";
const NO_ERROR: &str = "None";

/// Displayable fields of a row with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogDetail {
  pub id: i64,
  pub timestamp: String,
  pub api_endpoint: String,
  pub status_code: i64,
  pub request_payload: String,
  pub response_payload: String,
  pub error_message: String,
}

impl From<&LogEntry> for LogDetail {
  fn from(row: &LogEntry) -> Self {
    LogDetail {
      id: row.id,
      timestamp: row.timestamp.clone(),
      api_endpoint: row.api_endpoint.clone(),
      status_code: row.status_code,
      request_payload: row.request_payload.clone().unwrap_or_else(|| EMPTY_PAYLOAD.into()),
      response_payload: row.response_payload.clone().unwrap_or_else(|| EMPTY_PAYLOAD.into()),
      error_message: row.error_message.clone().unwrap_or_else(|| NO_ERROR.into()),
    }
  }
}

impl LogDetail {
  pub fn lines(&self) -> [String; 6] {
    [
      format!("Timestamp: {}", self.timestamp),
      format!("API Endpoint: {}", self.api_endpoint),
      format!("Status Code: {}", self.status_code),
      format!("Request Payload: {}", self.request_payload),
      format!("Response Payload: {}", self.response_payload),
      format!("Error Message: {}", self.error_message),
    ]
  }
}

/// Plain-text detail view, or the selection prompt when nothing is selected.
pub fn render_detail(selected: Option<&LogEntry>) -> String {
  match selected {
    None => NO_SELECTION_PROMPT.to_string(),
    Some(row) => LogDetail::from(row).lines().join("\n"),
  }
}
