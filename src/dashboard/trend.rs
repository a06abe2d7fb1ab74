//! Time-bucketed request counts for the trend chart.
//!
//! The observed timestamp range `[min, max]` is split into [`TREND_BUCKETS`]
//! equal-width intervals. Bucket `i` covers `[min + i*w, min + (i+1)*w)`,
//! except the last one which also holds `max`. Only non-empty
//! `(bucket, status_code)` pairs are emitted.

use crate::models::log::log_entry::{LogEntry, TIMESTAMP_FORMAT};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

pub const TREND_BUCKETS: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendBucket {
  pub bucket: usize,
  pub start: String,
  pub end: String,
  pub status_code: i64,
  pub count: usize,
}

/// Group rows by time bucket and status code, ordered by bucket then code.
pub fn bucketize(rows: &[LogEntry]) -> Vec<TrendBucket> {
  let parsed: Vec<(NaiveDateTime, i64)> = rows
    .iter()
    .filter_map(|r| match NaiveDateTime::parse_from_str(&r.timestamp, TIMESTAMP_FORMAT) {
      Ok(ts) => Some((ts, r.status_code)),
      Err(e) => {
        warn!(id = r.id, timestamp = %r.timestamp, "skipping unparsable timestamp: {e}");
        None
      }
    })
    .collect();

  let (Some(min), Some(max)) = (
    parsed.iter().map(|(ts, _)| *ts).min(),
    parsed.iter().map(|(ts, _)| *ts).max(),
  ) else {
    return Vec::new();
  };
  let span = (max - min).num_seconds();

  let mut counts: BTreeMap<(i64, i64), usize> = BTreeMap::new();
  for (ts, status) in &parsed {
    *counts.entry((bucket_index(*ts, min, span), *status)).or_default() += 1;
  }

  counts
    .into_iter()
    .map(|((bucket, status_code), count)| {
      let (start, end) = bucket_bounds(bucket, min, span);
      TrendBucket {
        bucket: bucket as usize,
        start: start.format(TIMESTAMP_FORMAT).to_string(),
        end: end.format(TIMESTAMP_FORMAT).to_string(),
        status_code,
        count,
      }
    })
    .collect()
}

fn bucket_index(ts: NaiveDateTime, min: NaiveDateTime, span: i64) -> i64 {
  if span == 0 {
    return 0;
  }
  let offset = (ts - min).num_seconds();
  (offset * TREND_BUCKETS / span).min(TREND_BUCKETS - 1)
}

fn bucket_bounds(bucket: i64, min: NaiveDateTime, span: i64) -> (NaiveDateTime, NaiveDateTime) {
  let start = min + Duration::seconds(span * bucket / TREND_BUCKETS);
  let end = min + Duration::seconds(span * (bucket + 1) / TREND_BUCKETS);
  (start, end)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dashboard::test_rows::{row, sample_rows};

  #[test]
  fn counts_sum_to_row_count() {
    let rows = sample_rows();
    let buckets = bucketize(&rows);
    let total: usize = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, rows.len());
    assert!(buckets.iter().all(|b| b.count > 0));
    assert!(buckets.iter().all(|b| (b.bucket as i64) < TREND_BUCKETS));
  }

  #[test]
  fn min_and_max_land_in_first_and_last_bucket() {
    let rows = vec![
      row(1, "2024-05-01 00:00:00", "/login", 200),
      row(2, "2024-05-01 00:50:00", "/login", 500),
    ];
    let buckets = bucketize(&rows);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].bucket, 0);
    assert_eq!(buckets[0].start, "2024-05-01 00:00:00");
    assert_eq!(buckets[0].end, "2024-05-01 00:01:00");
    assert_eq!(buckets[1].bucket, 49);
    assert_eq!(buckets[1].end, "2024-05-01 00:50:00");
    assert_eq!(buckets[1].status_code, 500);
  }

  #[test]
  fn groups_by_status_within_a_bucket() {
    let rows = vec![
      row(1, "2024-05-01 00:00:00", "/login", 500),
      row(2, "2024-05-01 00:00:10", "/login", 200),
      row(3, "2024-05-01 00:00:20", "/login", 500),
      row(4, "2024-05-01 01:40:00", "/login", 200),
    ];
    let buckets = bucketize(&rows);
    let first: Vec<(i64, usize)> = buckets
      .iter()
      .filter(|b| b.bucket == 0)
      .map(|b| (b.status_code, b.count))
      .collect();
    assert_eq!(first, vec![(200, 1), (500, 2)]);
  }

  #[test]
  fn identical_timestamps_share_bucket_zero() {
    let rows = vec![
      row(1, "2024-05-01 00:00:00", "/login", 200),
      row(2, "2024-05-01 00:00:00", "/signup", 200),
    ];
    let buckets = bucketize(&rows);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].bucket, 0);
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[0].start, buckets[0].end);
  }

  #[test]
  fn unparsable_timestamps_are_skipped() {
    let rows = vec![
      row(1, "yesterday", "/login", 200),
      row(2, "2024-05-01 00:00:00", "/login", 200),
    ];
    let buckets = bucketize(&rows);
    assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 1);
  }

  #[test]
  fn empty_rows_have_no_buckets() {
    assert!(bucketize(&[]).is_empty());
  }
}
