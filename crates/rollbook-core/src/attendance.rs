//! Attendance entries recorded against a student.
//!
//! On disk an entry is a single `"<STATUS>,<timestamp>"` string, e.g.
//! `"PRESENT,2025-10-14T10:00"`. Inside the model it is always the parsed
//! [`AttendanceEntry`] pair.

use std::{fmt, str::FromStr};

use chrono::{NaiveDateTime, Timelike};

use crate::{Error, Result};

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Whether the student attended a session.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  strum::Display,
  strum::EnumString,
  strum::VariantNames,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AttendanceStatus {
  Present,
  Absent,
  Late,
  Excused,
}

/// One attendance mark: a status at a local date-time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttendanceEntry {
  pub status: AttendanceStatus,
  pub at:     NaiveDateTime,
}

impl AttendanceEntry {
  pub fn new(status: AttendanceStatus, at: NaiveDateTime) -> Self {
    Self { status, at }
  }

  /// Parse the `"<STATUS>,<timestamp>"` encoding.
  ///
  /// The timestamp is ISO-8601 without offset, to the minute or the second.
  pub fn parse(encoded: &str) -> Result<Self> {
    let malformed = |reason: String| Error::MalformedAttendanceEntry {
      entry: encoded.to_string(),
      reason,
    };

    let (status, at) = encoded
      .split_once(',')
      .ok_or_else(|| malformed("expected \"STATUS,TIMESTAMP\"".to_string()))?;

    let status = AttendanceStatus::from_str(status.trim())
      .map_err(|_| malformed(format!("unknown status {:?}", status.trim())))?;

    let at = parse_timestamp(at.trim())
      .ok_or_else(|| malformed(format!("invalid timestamp {:?}", at.trim())))?;

    Ok(Self { status, at })
  }

  /// The `"<STATUS>,<timestamp>"` form. Seconds are written only when
  /// non-zero so that minute-precision input comes back unchanged.
  pub fn encode(&self) -> String {
    let format = if self.at.second() == 0 && self.at.nanosecond() == 0 {
      MINUTE_FORMAT
    } else {
      SECOND_FORMAT
    };
    format!("{},{}", self.status, self.at.format(format))
  }
}

/// Parse an attendance timestamp, to the minute or the second.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, MINUTE_FORMAT)
    .or_else(|_| NaiveDateTime::parse_from_str(s, SECOND_FORMAT))
    .ok()
}

impl fmt::Display for AttendanceEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.encode())
  }
}

impl FromStr for AttendanceEntry {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 14)
      .unwrap()
      .and_hms_opt(h, m, s)
      .unwrap()
  }

  #[test]
  fn parses_minute_precision() {
    let entry = AttendanceEntry::parse("PRESENT,2025-10-14T10:00").unwrap();
    assert_eq!(entry.status, AttendanceStatus::Present);
    assert_eq!(entry.at, at(10, 0, 0));
  }

  #[test]
  fn parses_second_precision_and_lowercase_status() {
    let entry = AttendanceEntry::parse("late, 2025-10-14T10:05:30").unwrap();
    assert_eq!(entry.status, AttendanceStatus::Late);
    assert_eq!(entry.at, at(10, 5, 30));
  }

  #[test]
  fn encode_is_inverse_of_parse() {
    for raw in ["PRESENT,2025-10-14T10:00", "EXCUSED,2025-10-14T23:59:01"] {
      assert_eq!(AttendanceEntry::parse(raw).unwrap().encode(), raw);
    }
  }

  #[test]
  fn encode_normalises_case_spacing_and_zero_seconds() {
    for (raw, stored) in [
      ("present , 2025-10-14T10:00:00", "PRESENT,2025-10-14T10:00"),
      ("Absent,2025-10-14T10:00", "ABSENT,2025-10-14T10:00"),
      ("LATE,2025-10-14T10:05:30", "LATE,2025-10-14T10:05:30"),
    ] {
      assert_eq!(AttendanceEntry::parse(raw).unwrap().encode(), stored);
    }
  }

  #[test]
  fn status_names_are_upper_case() {
    assert_eq!(AttendanceStatus::Absent.to_string(), "ABSENT");
    assert_eq!(
      <AttendanceStatus as strum::VariantNames>::VARIANTS,
      &["PRESENT", "ABSENT", "LATE", "EXCUSED"]
    );
  }

  #[test]
  fn missing_separator_is_malformed() {
    let err = AttendanceEntry::parse("PRESENT 2025-10-14T10:00").unwrap_err();
    assert!(matches!(err, Error::MalformedAttendanceEntry { .. }));
  }

  #[test]
  fn unknown_status_is_malformed() {
    let err = AttendanceEntry::parse("SLEEPING,2025-10-14T10:00").unwrap_err();
    let Error::MalformedAttendanceEntry { entry, reason } = err else {
      panic!("expected MalformedAttendanceEntry")
    };
    assert_eq!(entry, "SLEEPING,2025-10-14T10:00");
    assert!(reason.contains("SLEEPING"));
  }

  #[test]
  fn bad_timestamp_is_malformed() {
    for raw in ["PRESENT,", "PRESENT,yesterday", "PRESENT,2025-13-01T10:00"] {
      assert!(matches!(
        AttendanceEntry::parse(raw),
        Err(Error::MalformedAttendanceEntry { .. })
      ));
    }
  }
}
