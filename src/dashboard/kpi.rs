//! Summary counters shown as KPI cards.

use crate::models::log::log_entry::LogEntry;
use serde::Serialize;

/// Counts are independent: `total` can exceed `success + failure` when
/// rows carry 3xx (or sub-200) codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
  pub total: usize,
  pub success: usize,
  pub failure: usize,
}

impl Kpis {
  pub fn compute(rows: &[LogEntry]) -> Self {
    Kpis {
      total: rows.len(),
      success: rows.iter().filter(|r| r.is_success()).count(),
      failure: rows.iter().filter(|r| r.is_failure()).count(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dashboard::test_rows::{row, sample_rows};

  #[test]
  fn counts_each_category() {
    let rows = vec![
      row(1, "2024-05-01 10:00:00", "/login", 200),
      row(2, "2024-05-01 10:01:00", "/login", 201),
      row(3, "2024-05-01 10:02:00", "/login", 404),
      row(4, "2024-05-01 10:03:00", "/login", 500),
      row(5, "2024-05-01 10:04:00", "/login", 302),
    ];
    assert_eq!(
      Kpis::compute(&rows),
      Kpis {
        total: 5,
        success: 2,
        failure: 2
      }
    );
  }

  #[test]
  fn total_bounds_both_categories() {
    let k = Kpis::compute(&sample_rows());
    assert!(k.total >= k.success.max(k.failure));
    assert!(k.total > k.success + k.failure, "sample rows include a redirect");
  }

  #[test]
  fn total_equals_sum_without_redirects() {
    let rows: Vec<_> = sample_rows()
      .into_iter()
      .filter(|r| r.is_success() || r.is_failure())
      .collect();
    let k = Kpis::compute(&rows);
    assert_eq!(k.total, k.success + k.failure);
  }

  #[test]
  fn empty_rows_count_zero() {
    assert_eq!(Kpis::compute(&[]), Kpis::default());
  }
}
