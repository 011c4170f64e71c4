//! CSV exporters for the two derived reports.
//!
//! Each exporter runs one read query against the store and writes one file,
//! overwriting whatever was there. The writers are `io::Write`-generic so
//! tests can capture the exact bytes.

use std::{fs::File, io::Write, path::Path};

use anyhow::Context as _;
use callbook_core::{
  record::{CallLog, UserAnalytics},
  store::CallStore,
};
use csv::WriterBuilder;
use serde::Serialize;

/// One output row of `orderedCalls.csv`.
///
/// `row_number` restarts from 1 on every export and is unrelated to the
/// stored id.
#[derive(Serialize)]
struct OrderedCallRow<'a> {
  row_number:   u64,
  phone_number: &'a str,
  start_time:   i64,
  end_time:     i64,
  direction:    &'a str,
  user_id:      i64,
}

/// Write `userAnalytics.csv`: one row per distinct user id seen in the call
/// logs, dangling ids included.
pub async fn export_user_analytics<S: CallStore>(
  store: &S,
  path: &Path,
) -> anyhow::Result<()> {
  let rows = store.user_analytics().await?;
  let file = File::create(path)
    .with_context(|| format!("failed to create {}", path.display()))?;
  write_user_analytics(file, &rows)?;

  tracing::info!(rows = rows.len(), path = %path.display(), "wrote user analytics");
  Ok(())
}

/// `avgDuration` is rendered with exactly one fractional digit (`105.0`
/// style); the query already rounded to one decimal place.
pub fn write_user_analytics<W: Write>(
  out: W,
  rows: &[UserAnalytics],
) -> anyhow::Result<()> {
  let mut writer = csv::Writer::from_writer(out);
  writer.write_record(["userId", "avgDuration", "numCalls"])?;
  for row in rows {
    writer.write_record([
      row.user_id.to_string(),
      format!("{:.1}", row.avg_duration),
      row.num_calls.to_string(),
    ])?;
  }
  writer.flush()?;
  Ok(())
}

/// Write `orderedCalls.csv`: every call row sorted by user id then start
/// time, numbered from 1 in output order.
pub async fn export_ordered_calls<S: CallStore>(
  store: &S,
  path: &Path,
) -> anyhow::Result<()> {
  let calls = store.ordered_calls().await?;
  let file = File::create(path)
    .with_context(|| format!("failed to create {}", path.display()))?;
  write_ordered_calls(file, &calls)?;

  tracing::info!(rows = calls.len(), path = %path.display(), "wrote ordered calls");
  Ok(())
}

pub fn write_ordered_calls<W: Write>(
  out: W,
  calls: &[CallLog],
) -> anyhow::Result<()> {
  // Header written by hand so an empty export still carries it.
  let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
  writer.write_record([
    "rowNumber",
    "phoneNumber",
    "startTime",
    "endTime",
    "direction",
    "userId",
  ])?;

  for (i, call) in calls.iter().enumerate() {
    writer.serialize(OrderedCallRow {
      row_number:   (i + 1) as u64,
      phone_number: &call.phone_number,
      start_time:   call.start_time,
      end_time:     call.end_time,
      direction:    &call.direction,
      user_id:      call.user_id,
    })?;
  }

  writer.flush()?;
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn analytics(user_id: i64, avg_duration: f64, num_calls: i64) -> UserAnalytics {
    UserAnalytics {
      user_id,
      avg_duration,
      num_calls,
    }
  }

  fn call_log(id: i64, phone: &str, start: i64, end: i64, user_id: i64) -> CallLog {
    CallLog {
      id,
      phone_number: phone.to_string(),
      start_time: start,
      end_time: end,
      direction: "outbound".to_string(),
      user_id,
    }
  }

  fn to_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf-8 output")
  }

  #[test]
  fn analytics_header_and_one_decimal_format() {
    let mut out = Vec::new();
    write_user_analytics(&mut out, &[analytics(1, 105.0, 2)]).unwrap();

    assert_eq!(to_string(out), "userId,avgDuration,numCalls\n1,105.0,2\n");
  }

  #[test]
  fn analytics_always_shows_one_fractional_digit() {
    let mut out = Vec::new();
    write_user_analytics(&mut out, &[
      analytics(1, 100.0, 1),
      analytics(2, 100.5, 4),
      analytics(9, -20.0, 1),
    ])
    .unwrap();

    let text = to_string(out);
    let mut lines = text.lines().skip(1);
    assert_eq!(lines.next(), Some("1,100.0,1"));
    assert_eq!(lines.next(), Some("2,100.5,4"));
    assert_eq!(lines.next(), Some("9,-20.0,1"));
  }

  #[test]
  fn ordered_row_numbers_ignore_stored_ids() {
    let mut out = Vec::new();
    write_ordered_calls(&mut out, &[
      call_log(7, "555-0001", 50, 150, 1),
      call_log(3, "555-0002", 100, 210, 1),
    ])
    .unwrap();

    let text = to_string(out);
    let mut lines = text.lines();
    assert_eq!(
      lines.next(),
      Some("rowNumber,phoneNumber,startTime,endTime,direction,userId")
    );
    assert_eq!(lines.next(), Some("1,555-0001,50,150,outbound,1"));
    assert_eq!(lines.next(), Some("2,555-0002,100,210,outbound,1"));
  }

  #[test]
  fn empty_reports_still_carry_headers() {
    let mut analytics_out = Vec::new();
    write_user_analytics(&mut analytics_out, &[]).unwrap();
    assert_eq!(to_string(analytics_out), "userId,avgDuration,numCalls\n");

    let mut ordered_out = Vec::new();
    write_ordered_calls(&mut ordered_out, &[]).unwrap();
    assert_eq!(
      to_string(ordered_out),
      "rowNumber,phoneNumber,startTime,endTime,direction,userId\n"
    );
  }
}
