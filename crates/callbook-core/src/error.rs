//! Recoverable per-record conditions.
//!
//! A [`SkipReason`] is not a run-aborting error: the loader logs it and moves
//! on to the next record. Fatal I/O and store errors live with the crates
//! that produce them.

use thiserror::Error;

/// Why one input record was rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
  #[error("expected {expected} fields, found {found}")]
  FieldCount { expected: usize, found: usize },

  #[error("field {name:?} is empty after trimming")]
  EmptyField { name: &'static str },

  #[error("field {name:?} is not an integer: {value:?}")]
  NotAnInteger { name: &'static str, value: String },
}
