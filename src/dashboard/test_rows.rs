//! Fixture rows shared by the dashboard unit tests.

use crate::models::log::log_entry::LogEntry;

pub fn row(id: i64, timestamp: &str, endpoint: &str, status: i64) -> LogEntry {
  LogEntry {
    id,
    timestamp: timestamp.to_string(),
    api_endpoint: endpoint.to_string(),
    status_code: status,
    request_payload: None,
    response_payload: None,
    error_message: (status >= 400).then(|| "Internal server error".to_string()),
  }
}

pub fn sample_rows() -> Vec<LogEntry> {
  vec![
    row(1, "2024-05-01 08:00:00", "/login", 200),
    row(2, "2024-05-01 08:15:00", "/payment", 500),
    row(3, "2024-05-01 09:30:00", "/signup", 201),
    row(4, "2024-05-01 11:45:00", "/payment", 400),
    row(5, "2024-05-01 13:00:00", "/login", 302),
    row(6, "2024-05-01 18:20:00", "/login", 401),
    row(7, "2024-05-02 01:05:00", "/profile/update", 200),
    row(8, "2024-05-02 07:59:59", "/payment", 200),
  ]
}
