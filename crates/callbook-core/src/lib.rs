//! Core types and trait definitions for the callbook pipeline.
//!
//! This crate is deliberately free of database and file-format dependencies.
//! All other crates depend on it; it depends on nothing heavier than
//! `thiserror`.

pub mod error;
pub mod record;
pub mod store;
pub mod validate;

pub use error::SkipReason;
