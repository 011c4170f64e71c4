//! SQLite backend for the callbook store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! connection thread.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
