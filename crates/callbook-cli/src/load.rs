//! CSV loaders for the two input files.
//!
//! Each loader streams records through the pure validation functions in
//! `callbook-core` and inserts only the `Ok` rows. Malformed rows are skipped
//! with a debug log; an unreadable input file aborts the run.

use std::{fs::File, io::Read, path::Path};

use anyhow::Context as _;
use callbook_core::{store::CallStore, validate};
use csv::ReaderBuilder;

/// Build a reader that tolerates rows of any width. Length checks belong to
/// validation, not the parser. The first row is a header and is discarded.
fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
  ReaderBuilder::new().flexible(true).from_reader(input)
}

/// Load `users.csv` into the user table, discarding invalid rows.
pub async fn load_users<S: CallStore>(
  store: &S,
  path: &Path,
) -> anyhow::Result<()> {
  let file = File::open(path)
    .with_context(|| format!("failed to open {}", path.display()))?;
  load_users_from(store, file).await
}

/// Reader-generic body of [`load_users`]; tests feed it byte slices.
pub async fn load_users_from<S: CallStore, R: Read>(
  store: &S,
  input: R,
) -> anyhow::Result<()> {
  let mut reader = csv_reader(input);
  let mut inserted = 0u64;
  let mut skipped = 0u64;

  for record in reader.records() {
    let record = record.context("failed to read user record")?;
    let fields: Vec<&str> = record.iter().collect();
    match validate::validate_user(&fields) {
      Ok(user) => {
        store.insert_user(user).await?;
        inserted += 1;
      }
      Err(reason) => {
        skipped += 1;
        tracing::debug!(
          %reason,
          line = record.position().map(|p| p.line()),
          "skipping user row"
        );
      }
    }
  }

  tracing::info!(inserted, skipped, "loaded users");
  Ok(())
}

/// Load `callLogs.csv` into the call-log table, discarding invalid rows.
pub async fn load_call_logs<S: CallStore>(
  store: &S,
  path: &Path,
) -> anyhow::Result<()> {
  let file = File::open(path)
    .with_context(|| format!("failed to open {}", path.display()))?;
  load_call_logs_from(store, file).await
}

/// Reader-generic body of [`load_call_logs`].
pub async fn load_call_logs_from<S: CallStore, R: Read>(
  store: &S,
  input: R,
) -> anyhow::Result<()> {
  let mut reader = csv_reader(input);
  let mut inserted = 0u64;
  let mut skipped = 0u64;

  for record in reader.records() {
    let record = record.context("failed to read call-log record")?;
    let fields: Vec<&str> = record.iter().collect();
    match validate::validate_call_log(&fields) {
      Ok(call) => {
        store.insert_call_log(call).await?;
        inserted += 1;
      }
      Err(reason) => {
        skipped += 1;
        tracing::debug!(
          %reason,
          line = record.position().map(|p| p.line()),
          "skipping call-log row"
        );
      }
    }
  }

  tracing::info!(inserted, skipped, "loaded call logs");
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
