//! The root document: `{ "persons": [ ... ] }`.

use rollbook_core::{Error as CoreError, roster::Roster};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  adapted::JsonAdaptedRecord,
  error::{Error, Result},
};

/// A whole roster in its stored shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableRoster {
  #[serde(default)]
  persons: Vec<JsonAdaptedRecord>,
}

impl JsonSerializableRoster {
  pub fn new(persons: Vec<JsonAdaptedRecord>) -> Self { Self { persons } }

  /// One flat record per roster entry, in roster order.
  pub fn from_roster(roster: &Roster) -> Self {
    Self {
      persons: roster.iter().map(JsonAdaptedRecord::from_record).collect(),
    }
  }

  pub fn persons(&self) -> &[JsonAdaptedRecord] { &self.persons }

  /// Convert every entry back into a record.
  ///
  /// All-or-nothing: the first invalid or duplicate entry aborts the whole
  /// conversion and nothing already converted is returned.
  pub fn into_model(self) -> Result<Roster> {
    let mut roster = Roster::new();
    for (i, adapted) in self.persons.into_iter().enumerate() {
      insert(&mut roster, i + 1, adapted)?;
    }
    Ok(roster)
  }
}

// ─── Text decoding ───────────────────────────────────────────────────────────

/// The root document with its entries still untyped, so that an entry of
/// the wrong shape can be reported by position.
#[derive(Deserialize)]
struct RawRoster {
  #[serde(default)]
  persons: Vec<Value>,
}

/// Decode a whole document, one entry at a time.
pub(crate) fn roster_from_str(input: &str) -> Result<Roster> {
  let raw: RawRoster = serde_json::from_str(input)?;
  let mut roster = Roster::new();

  for (i, value) in raw.persons.into_iter().enumerate() {
    let position = i + 1;
    let adapted = serde_json::from_value::<JsonAdaptedRecord>(value)
      .map_err(|source| Error::EntryShape { position, source })?;
    insert(&mut roster, position, adapted)?;
  }

  Ok(roster)
}

fn insert(
  roster: &mut Roster,
  position: usize,
  adapted: JsonAdaptedRecord,
) -> Result<()> {
  let record = adapted
    .into_model()
    .map_err(|source| Error::InvalidEntry { position, source })?;

  roster.add(record).map_err(|source| match source {
    CoreError::DuplicateRecord(name) => Error::Duplicate { position, name },
    source => Error::InvalidEntry { position, source },
  })
}
