//! SQL schema for the callbook SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The foreign key on `call_logs.user_id` is declared but never enforced:
/// the `foreign_keys` pragma stays off, so call rows may reference users
/// that were never loaded.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id         INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL
);

-- Rows are insert-only. No UPDATE or DELETE is ever issued.
CREATE TABLE IF NOT EXISTS call_logs (
    id           INTEGER PRIMARY KEY,
    phone_number TEXT    NOT NULL,
    start_time   INTEGER NOT NULL,
    end_time     INTEGER NOT NULL,   -- may be less than start_time
    direction    TEXT    NOT NULL,   -- free text, e.g. 'inbound' | 'outbound'
    user_id      INTEGER NOT NULL REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS call_logs_user_start_idx
    ON call_logs(user_id, start_time);
";
