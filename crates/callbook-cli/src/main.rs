//! callbook pipeline binary.
//!
//! Loads `users.csv` and `callLogs.csv` from the data directory into a
//! SQLite database, then writes `userAnalytics.csv` and `orderedCalls.csv`
//! next to them. The database is in-memory unless `--db` is given.

use std::path::PathBuf;

use anyhow::Context as _;
use callbook_core::store::CallStore;
use callbook_store_sqlite::SqliteStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod export;
mod load;


#[derive(Parser)]
#[command(author, version, about = "Call-record ingestion and reporting")]
struct Cli {
  /// Directory holding users.csv and callLogs.csv; reports are written here.
  #[arg(short, long, default_value = "resources")]
  data_dir: PathBuf,

  /// Persist the database to this file instead of running in memory.
  #[arg(long)]
  db: Option<PathBuf>,

  /// Print the contents of both tables after loading.
  #[arg(long)]
  dump: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let store = match &cli.db {
    Some(path) => SqliteStore::open(path)
      .await
      .with_context(|| format!("failed to open store at {path:?}"))?,
    None => SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?,
  };

  // Users must load before the calls that reference them, even though the
  // reference is never enforced.
  load::load_users(&store, &cli.data_dir.join("users.csv")).await?;
  load::load_call_logs(&store, &cli.data_dir.join("callLogs.csv")).await?;

  export::export_user_analytics(&store, &cli.data_dir.join("userAnalytics.csv"))
    .await?;
  export::export_ordered_calls(&store, &cli.data_dir.join("orderedCalls.csv"))
    .await?;

  if cli.dump {
    dump_tables(&store).await?;
  }

  Ok(())
}

/// Print every row of both tables — the `--dump` debug aid.
async fn dump_tables<S: CallStore>(store: &S) -> anyhow::Result<()> {
  println!("users");
  println!("-----");
  for user in store.list_users().await? {
    println!("{} | {} | {}", user.id, user.first_name, user.last_name);
  }

  println!();
  println!("call_logs");
  println!("---------");
  for call in store.list_call_logs().await? {
    println!(
      "{} | {} | {} | {} | {} | {}",
      call.id,
      call.phone_number,
      call.start_time,
      call.end_time,
      call.direction,
      call.user_id
    );
  }

  Ok(())
}
