//! One recorded API request/response event, as stored in `api_logs`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Timestamp layout used by the `timestamp` column. Lexicographic order of
/// this layout equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub api_endpoint: String,
    pub status_code: i64,
    pub request_payload: Option<String>,
    pub response_payload: Option<String>,
    pub error_message: Option<String>,
}

impl LogEntry {
    /// 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// 4xx and 5xx responses. 3xx is neither success nor failure.
    pub fn is_failure(&self) -> bool {
        self.status_code >= 400
    }
}
