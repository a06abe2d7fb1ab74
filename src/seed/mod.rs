//! Synthetic log rows for local development.

use crate::models::log::{log_entry::TIMESTAMP_FORMAT, new_log_entry::NewLogEntry};
use chrono::{Duration, NaiveDateTime};
use rand::{Rng, seq::SliceRandom};
use serde_json::json;
use sqlx::SqlitePool;

pub const DEFAULT_COUNT: usize = 500;

/// Rows are spread over this many minutes before "now".
pub const WINDOW_MINUTES: i64 = 1440;

pub const ENDPOINTS: [&str; 5] = ["/login", "/signup", "/payment", "/profile/update", "/order/create"];
pub const STATUS_CODES: [i64; 5] = [200, 201, 400, 401, 500];
pub const SUCCESS_MESSAGES: [&str; 5] = [
  "Request successful",
  "User created",
  "Payment processed",
  "Profile updated",
  "Order placed",
];
pub const ERROR_MESSAGES: [&str; 5] = [
  "Invalid credentials",
  "Missing parameters",
  "Payment failed",
  "Unauthorized access",
  "Internal server error",
];

/// Generate `count` rows with timestamps in `[now - WINDOW_MINUTES, now]`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, count: usize) -> Vec<NewLogEntry> {
  (0..count).map(|_| generate_one(rng, now)).collect()
}

fn generate_one<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NewLogEntry {
  let ts = now - Duration::minutes(rng.gen_range(0..=WINDOW_MINUTES));
  let endpoint = pick(rng, &ENDPOINTS);
  let status = *STATUS_CODES.choose(rng).unwrap_or(&200);
  let request_payload = json!({ "user_id": rng.gen_range(1000..=9999) }).to_string();

  let (response_payload, error_message) = if status >= 400 {
    let response = json!({ "error": pick(rng, &ERROR_MESSAGES) }).to_string();
    (response, Some(pick(rng, &ERROR_MESSAGES).to_string()))
  } else {
    (json!({ "message": pick(rng, &SUCCESS_MESSAGES) }).to_string(), None)
  };

  NewLogEntry {
    timestamp: ts.format(TIMESTAMP_FORMAT).to_string(),
    api_endpoint: endpoint.to_string(),
    status_code: status,
    request_payload: Some(request_payload),
    response_payload: Some(response_payload),
    error_message,
  }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
  pool.choose(rng).copied().unwrap_or_default()
}

/// Insert rows in a single transaction.
pub async fn insert_entries(pool: &SqlitePool, rows: &[NewLogEntry]) -> Result<(), sqlx::Error> {
  let mut tx = pool.begin().await?;
  for row in rows {
    sqlx::query(
      "INSERT INTO api_logs (timestamp, api_endpoint, status_code, request_payload, response_payload, error_message) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&row.timestamp)
    .bind(&row.api_endpoint)
    .bind(row.status_code)
    .bind(&row.request_payload)
    .bind(&row.response_payload)
    .bind(&row.error_message)
    .execute(&mut *tx)
    .await?;
  }
  tx.commit().await?;
  Ok(())
}
