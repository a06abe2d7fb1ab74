//! Error taxonomy and its HTTP mapping.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum DashboardError {
  #[error("storage unavailable: {0}")]
  StorageUnavailable(#[from] sqlx::Error),

  #[error("log entry {0} not found")]
  NotFound(i64),

  #[error("invalid log id {0:?}")]
  InvalidId(String),

  #[error("invalid listen address: {0}")]
  Addr(#[from] std::net::AddrParseError),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl IntoResponse for DashboardError {
  fn into_response(self) -> Response {
    match self {
      DashboardError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
      DashboardError::InvalidId(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
      DashboardError::StorageUnavailable(e) => {
        error!("storage unavailable: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable").into_response()
      }
      other => {
        error!("request failed: {other}");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
      }
    }
  }
}
