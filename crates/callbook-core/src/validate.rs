//! Pure per-record validation.
//!
//! Both functions take the raw fields of one input row (the header row is the
//! caller's problem) and either produce a validated record or name the first
//! check that failed. Checks run in a fixed order: field count, then
//! emptiness after trimming, then integer parsing.

use crate::{
  error::SkipReason,
  record::{NewCallLog, NewUser},
};

const USER_FIELDS: usize = 2;
const CALL_FIELDS: usize = 5;

fn require_non_empty<'a>(
  name: &'static str,
  raw: &'a str,
) -> Result<&'a str, SkipReason> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    Err(SkipReason::EmptyField { name })
  } else {
    Ok(trimmed)
  }
}

fn parse_i64(name: &'static str, raw: &str) -> Result<i64, SkipReason> {
  raw.parse().map_err(|_| SkipReason::NotAnInteger {
    name,
    value: raw.to_string(),
  })
}

/// Validate one raw `users.csv` row: `(firstName, lastName)`.
pub fn validate_user(fields: &[&str]) -> Result<NewUser, SkipReason> {
  if fields.len() != USER_FIELDS {
    return Err(SkipReason::FieldCount {
      expected: USER_FIELDS,
      found:    fields.len(),
    });
  }

  let first_name = require_non_empty("firstName", fields[0])?;
  let last_name = require_non_empty("lastName", fields[1])?;

  Ok(NewUser {
    first_name: first_name.to_string(),
    last_name:  last_name.to_string(),
  })
}

/// Validate one raw `callLogs.csv` row:
/// `(phoneNumber, startTime, endTime, direction, userId)`.
///
/// All five fields are checked for emptiness before any integer parsing, so
/// an empty numeric field reports [`SkipReason::EmptyField`], not
/// [`SkipReason::NotAnInteger`].
pub fn validate_call_log(fields: &[&str]) -> Result<NewCallLog, SkipReason> {
  if fields.len() != CALL_FIELDS {
    return Err(SkipReason::FieldCount {
      expected: CALL_FIELDS,
      found:    fields.len(),
    });
  }

  let phone_number = require_non_empty("phoneNumber", fields[0])?;
  let start_time = require_non_empty("startTime", fields[1])?;
  let end_time = require_non_empty("endTime", fields[2])?;
  let direction = require_non_empty("direction", fields[3])?;
  let user_id = require_non_empty("userId", fields[4])?;

  Ok(NewCallLog {
    phone_number: phone_number.to_string(),
    start_time:   parse_i64("startTime", start_time)?,
    end_time:     parse_i64("endTime", end_time)?,
    direction:    direction.to_string(),
    user_id:      parse_i64("userId", user_id)?,
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ── Users ──────────────────────────────────────────────────────────────────

  #[test]
  fn user_valid_row() {
    let user = validate_user(&["Ann", "Lee"]).unwrap();
    assert_eq!(user.first_name, "Ann");
    assert_eq!(user.last_name, "Lee");
  }

  #[test]
  fn user_fields_are_trimmed() {
    let user = validate_user(&["  Ann ", "\tLee  "]).unwrap();
    assert_eq!(user.first_name, "Ann");
    assert_eq!(user.last_name, "Lee");
  }

  #[test]
  fn user_wrong_field_count_rejected() {
    let err = validate_user(&["Ann", "Lee", "extra"]).unwrap_err();
    assert_eq!(err, SkipReason::FieldCount {
      expected: 2,
      found:    3
    });

    let err = validate_user(&["Ann"]).unwrap_err();
    assert_eq!(err, SkipReason::FieldCount {
      expected: 2,
      found:    1
    });
  }

  #[test]
  fn user_empty_field_rejected() {
    assert!(matches!(
      validate_user(&["", "Lee"]),
      Err(SkipReason::EmptyField { name: "firstName" })
    ));
    // whitespace-only counts as empty
    assert!(matches!(
      validate_user(&["Ann", "   "]),
      Err(SkipReason::EmptyField { name: "lastName" })
    ));
  }

  // ── Call logs ──────────────────────────────────────────────────────────────

  fn call_fields<'a>() -> Vec<&'a str> {
    vec!["555-1234", "100", "250", "outbound", "1"]
  }

  #[test]
  fn call_valid_row() {
    let call = validate_call_log(&call_fields()).unwrap();
    assert_eq!(call.phone_number, "555-1234");
    assert_eq!(call.start_time, 100);
    assert_eq!(call.end_time, 250);
    assert_eq!(call.direction, "outbound");
    assert_eq!(call.user_id, 1);
  }

  #[test]
  fn call_fields_are_trimmed() {
    let call =
      validate_call_log(&[" 555-1234 ", " 100", "250 ", " inbound ", " 3 "])
        .unwrap();
    assert_eq!(call.phone_number, "555-1234");
    assert_eq!(call.direction, "inbound");
    assert_eq!(call.user_id, 3);
  }

  #[test]
  fn call_wrong_field_count_rejected() {
    let err = validate_call_log(&["555-1234", "100", "250", "outbound"])
      .unwrap_err();
    assert_eq!(err, SkipReason::FieldCount {
      expected: 5,
      found:    4
    });
  }

  #[test]
  fn call_non_integer_user_id_rejected() {
    let mut fields = call_fields();
    fields[4] = "abc";
    let err = validate_call_log(&fields).unwrap_err();
    assert_eq!(err, SkipReason::NotAnInteger {
      name:  "userId",
      value: "abc".to_string(),
    });
  }

  #[test]
  fn call_non_integer_times_rejected() {
    let mut fields = call_fields();
    fields[1] = "ten";
    assert!(matches!(
      validate_call_log(&fields),
      Err(SkipReason::NotAnInteger {
        name: "startTime",
        ..
      })
    ));

    let mut fields = call_fields();
    fields[2] = "12.5";
    assert!(matches!(
      validate_call_log(&fields),
      Err(SkipReason::NotAnInteger { name: "endTime", .. })
    ));
  }

  #[test]
  fn call_empty_numeric_field_reports_empty_not_parse() {
    let mut fields = call_fields();
    fields[1] = "  ";
    assert!(matches!(
      validate_call_log(&fields),
      Err(SkipReason::EmptyField { name: "startTime" })
    ));
  }

  #[test]
  fn call_end_before_start_accepted() {
    // No ordering constraint between start and end.
    let call =
      validate_call_log(&["555-1234", "400", "380", "inbound", "9"]).unwrap();
    assert_eq!(call.end_time - call.start_time, -20);
  }

  #[test]
  fn call_negative_integers_accepted() {
    let call =
      validate_call_log(&["555-1234", "-100", "-50", "outbound", "-1"])
        .unwrap();
    assert_eq!(call.start_time, -100);
    assert_eq!(call.user_id, -1);
  }
}
