//! [`SqliteStore`] — the SQLite implementation of [`CallStore`].

use std::path::Path;

use callbook_core::{
  record::{CallLog, NewCallLog, NewUser, User, UserAnalytics},
  store::CallStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A callbook store backed by a single SQLite database.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — the default for a pipeline run, and what the
  /// tests use.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn call_log_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CallLog> {
  Ok(CallLog {
    id:           row.get(0)?,
    phone_number: row.get(1)?,
    start_time:   row.get(2)?,
    end_time:     row.get(3)?,
    direction:    row.get(4)?,
    user_id:      row.get(5)?,
  })
}

// ─── CallStore impl ──────────────────────────────────────────────────────────

impl CallStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert_user(&self, user: NewUser) -> Result<User> {
    let user = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (first_name, last_name) VALUES (?1, ?2)",
          rusqlite::params![user.first_name, user.last_name],
        )?;
        Ok(User {
          id:         conn.last_insert_rowid(),
          first_name: user.first_name,
          last_name:  user.last_name,
        })
      })
      .await?;
    Ok(user)
  }

  async fn insert_call_log(&self, call: NewCallLog) -> Result<CallLog> {
    let call = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO call_logs (phone_number, start_time, end_time, direction, user_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            call.phone_number,
            call.start_time,
            call.end_time,
            call.direction,
            call.user_id,
          ],
        )?;
        Ok(CallLog {
          id:           conn.last_insert_rowid(),
          phone_number: call.phone_number,
          start_time:   call.start_time,
          end_time:     call.end_time,
          direction:    call.direction,
          user_id:      call.user_id,
        })
      })
      .await?;
    Ok(call)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn user_analytics(&self) -> Result<Vec<UserAnalytics>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT user_id, ROUND(AVG(end_time - start_time), 1), COUNT(*)
           FROM call_logs
           GROUP BY user_id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(UserAnalytics {
              user_id:      row.get(0)?,
              avg_duration: row.get(1)?,
              num_calls:    row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn ordered_calls(&self) -> Result<Vec<CallLog>> {
    let rows = self
      .conn
      .call(|conn| {
        // `id` as the last key pins equal (user_id, start_time) pairs to
        // insertion order.
        let mut stmt = conn.prepare(
          "SELECT id, phone_number, start_time, end_time, direction, user_id
           FROM call_logs
           ORDER BY user_id, start_time, id",
        )?;
        let rows = stmt
          .query_map([], call_log_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, first_name, last_name FROM users ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(User {
              id:         row.get(0)?,
              first_name: row.get(1)?,
              last_name:  row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn list_call_logs(&self) -> Result<Vec<CallLog>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, phone_number, start_time, end_time, direction, user_id
           FROM call_logs
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], call_log_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
