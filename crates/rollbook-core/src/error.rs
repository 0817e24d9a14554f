//! Error types for `rollbook-core`.

use thiserror::Error;

use crate::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A mandatory base field was absent from stored data.
  #[error("Person's {0} field is missing!")]
  MissingField(FieldKind),

  /// A present value failed its type's format rule. `message` is the fixed
  /// constraint text of that type.
  #[error("{message}")]
  Format {
    field:   FieldKind,
    message: &'static str,
  },

  #[error("unknown record type: {0:?}")]
  UnknownType(String),

  #[error("record type discriminator is missing")]
  MissingType,

  #[error("malformed attendance entry {entry:?}: {reason}")]
  MalformedAttendanceEntry { entry: String, reason: String },

  #[error("roster already contains a record named {0:?}")]
  DuplicateRecord(String),

  #[error("index {index} is out of range for a roster of {len} record(s)")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("record {0} is not a student")]
  NotAStudent(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
