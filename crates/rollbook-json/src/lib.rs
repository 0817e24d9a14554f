//! JSON persistence format for a Rollbook roster.
//!
//! Converts between [`rollbook_core`] records and the flat, schema-less JSON
//! stored on disk. Pure synchronous; no file I/O.
//!
//! # Quick start
//!
//! ```no_run
//! let text = r#"{ "persons": [] }"#;
//! let roster = rollbook_json::roster_from_str(text).unwrap();
//! assert!(roster.is_empty());
//! ```

mod adapted;
pub mod error;
mod roster;

pub use adapted::{JsonAdaptedRecord, JsonAdaptedTag};
pub use error::{Error, Result};
pub use roster::JsonSerializableRoster;
use rollbook_core::{record::Record, roster::Roster};

// ─── Single records ──────────────────────────────────────────────────────────

/// Flatten one record. Never fails.
pub fn serialize_record(record: &Record) -> JsonAdaptedRecord {
  JsonAdaptedRecord::from_record(record)
}

/// Validate and rebuild one record.
pub fn deserialize_record(
  adapted: JsonAdaptedRecord,
) -> rollbook_core::Result<Record> {
  adapted.into_model()
}

// ─── Whole roster ────────────────────────────────────────────────────────────

/// Render `roster` as the pretty-printed root document.
pub fn roster_to_string(roster: &Roster) -> Result<String> {
  let doc = JsonSerializableRoster::from_roster(roster);
  Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse the root document and rebuild every record.
///
/// A failing entry is reported with its 1-based position, whether its
/// JSON shape is wrong or one of its values is invalid.
pub fn roster_from_str(input: &str) -> Result<Roster> {
  let roster = roster::roster_from_str(input)?;
  tracing::debug!(records = roster.len(), "decoded roster");
  Ok(roster)
}


#[cfg(test)]
pub(crate) mod test_helpers;
