//! Error types for the rollbook-json codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The record at 1-based `position` in the `persons` array failed to
  /// convert.
  #[error("roster entry {position} is invalid: {source}")]
  InvalidEntry {
    position: usize,
    #[source]
    source:   rollbook_core::Error,
  },

  /// The entry at `position` is not shaped like a record, e.g. a field of
  /// the wrong JSON type.
  #[error("roster entry {position} is malformed: {source}")]
  EntryShape {
    position: usize,
    #[source]
    source:   serde_json::Error,
  },

  #[error("roster entry {position} duplicates an earlier record named {name:?}")]
  Duplicate { position: usize, name: String },

  /// The document itself is not JSON, or has no `persons` array.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
