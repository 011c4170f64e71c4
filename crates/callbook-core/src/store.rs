//! The `CallStore` trait — the seam between the pipeline and its backing
//! relational store.
//!
//! Implemented by storage backends (e.g. `callbook-store-sqlite`). The
//! loaders and exporters depend on this abstraction, not on any concrete
//! backend, so each can be tested in isolation against an injected in-memory
//! store.

use std::future::Future;

use crate::record::{CallLog, NewCallLog, NewUser, User, UserAnalytics};

/// Abstraction over the two-table relational store behind the pipeline.
///
/// Writes are insert-only; nothing in the system updates or deletes a row.
/// Inserts must be visible to every subsequent read on the same store handle.
pub trait CallStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert a validated user row; the store assigns the id.
  fn insert_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Insert a validated call-log row; the store assigns the id.
  ///
  /// `user_id` is stored exactly as given, whether or not it resolves to a
  /// loaded user.
  fn insert_call_log(
    &self,
    call: NewCallLog,
  ) -> impl Future<Output = Result<CallLog, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Per-user aggregates over call durations: one row per distinct
  /// `user_id` found in the call logs, in the store's grouping order.
  fn user_analytics(
    &self,
  ) -> impl Future<Output = Result<Vec<UserAnalytics>, Self::Error>> + Send + '_;

  /// All call-log rows ordered by `user_id`, then `start_time`, with ties
  /// broken by insertion order.
  fn ordered_calls(
    &self,
  ) -> impl Future<Output = Result<Vec<CallLog>, Self::Error>> + Send + '_;

  /// Every user row in insertion order. Debug dump only.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Every call-log row in insertion order. Debug dump only.
  fn list_call_logs(
    &self,
  ) -> impl Future<Output = Result<Vec<CallLog>, Self::Error>> + Send + '_;
}
