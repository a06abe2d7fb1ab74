//! Row to insert into `api_logs`; the id is assigned by SQLite.

#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub timestamp: String,
    pub api_endpoint: String,
    pub status_code: i64,
    pub request_payload: Option<String>,
    pub response_payload: Option<String>,
    pub error_message: Option<String>,
}
