//! Row types for the two tables and the derived analytics report.
//!
//! The `New*` forms carry no id; the persisted forms carry the id the store
//! assigned at insertion. Ids are stable and never reused or mutated.

/// A user row as validated from input, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub first_name: String,
  pub last_name:  String,
}

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
}

/// A call-log row as validated from input.
///
/// `end_time` may be less than `start_time`; no ordering between the two is
/// checked anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCallLog {
  pub phone_number: String,
  pub start_time:   i64,
  pub end_time:     i64,
  pub direction:    String,
  /// May name a user id that was never loaded; the foreign key is declared
  /// but not enforced.
  pub user_id:      i64,
}

/// A persisted call-log row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLog {
  pub id:           i64,
  pub phone_number: String,
  pub start_time:   i64,
  pub end_time:     i64,
  pub direction:    String,
  pub user_id:      i64,
}

/// Per-user aggregate over call durations.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAnalytics {
  pub user_id:      i64,
  /// Mean of `end_time - start_time`, rounded to one decimal place.
  pub avg_duration: f64,
  pub num_calls:    i64,
}
