//! The flat transfer structure for a single record.
//!
//! Pipeline (load):
//!   JSON object
//!     └─ serde                → JsonAdaptedRecord (every field optional)
//!          └─ into_model()    → base fields → tags → discriminator branch
//!               └─ Record::Person | Record::Student
//!
//! Saving goes the other way through [`JsonAdaptedRecord::from_record`],
//! which cannot fail.

use std::str::FromStr;

use rollbook_core::{
  Error, Result,
  attendance::AttendanceEntry,
  field::{Address, Email, FieldKind, Name, Phone, Tag},
  record::{Person, Record, RecordKind, Student, StudentDetails},
};
use serde::{Deserialize, Serialize};

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// A tag as stored: a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonAdaptedTag {
  tag_name: String,
}

impl JsonAdaptedTag {
  pub fn new(tag_name: impl Into<String>) -> Self {
    Self {
      tag_name: tag_name.into(),
    }
  }

  pub fn into_model(self) -> Result<Tag> { Tag::parse(self.tag_name) }
}

impl From<&Tag> for JsonAdaptedTag {
  fn from(tag: &Tag) -> Self { Self::new(tag.as_str()) }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One element of the `persons` array.
///
/// Base fields are `Option` so that an absent field can be reported as
/// missing rather than as a generic JSON error. The six student-only fields
/// are `None` for a person and are written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedRecord {
  #[serde(rename = "type")]
  pub kind:    Option<String>,
  pub name:    Option<String>,
  pub phone:   Option<String>,
  pub email:   Option<String>,
  pub address: Option<String>,
  #[serde(default)]
  pub tags:    Vec<JsonAdaptedTag>,

  // ── Student-only ──────────────────────────────────────────────────────
  #[serde(default)]
  pub class:             Option<String>,
  #[serde(default)]
  pub subjects:          Option<Vec<String>>,
  #[serde(default)]
  pub emergency_contact: Option<String>,
  #[serde(default)]
  pub payment_status:    Option<String>,
  #[serde(default)]
  pub assignment_status: Option<String>,
  #[serde(default)]
  pub attendance:        Option<Vec<String>>,
}

impl JsonAdaptedRecord {
  /// Flatten `record` for storage.
  pub fn from_record(record: &Record) -> Self {
    let base = record.base();
    let mut adapted = Self {
      kind: Some(record.kind().to_string()),
      name: Some(base.name().to_string()),
      phone: Some(base.phone().to_string()),
      email: Some(base.email().to_string()),
      address: Some(base.address().to_string()),
      tags: base.tags().iter().map(JsonAdaptedTag::from).collect(),
      ..Self::default()
    };

    match record {
      Record::Person(_) => {}
      Record::Student(s) => {
        adapted.class = Some(s.class().to_string());
        adapted.subjects = Some(s.subjects().to_vec());
        adapted.emergency_contact =
          s.emergency_contact().map(ToString::to_string);
        adapted.payment_status = Some(s.payment_status().to_string());
        adapted.assignment_status = Some(s.assignment_status().to_string());
        adapted.attendance =
          Some(s.attendance().iter().map(AttendanceEntry::encode).collect());
      }
    }

    adapted
  }

  /// Rebuild and validate the record.
  ///
  /// Fields are checked in a fixed order (name, phone, email, address, tags,
  /// then the discriminator) and the first failure is returned.
  pub fn into_model(mut self) -> Result<Record> {
    let name = required(self.name.take(), FieldKind::Name, Name::parse)?;
    let phone = required(self.phone.take(), FieldKind::Phone, Phone::parse)?;
    let email = required(self.email.take(), FieldKind::Email, Email::parse)?;
    let address =
      required(self.address.take(), FieldKind::Address, Address::parse)?;

    let tags = std::mem::take(&mut self.tags)
      .into_iter()
      .map(JsonAdaptedTag::into_model)
      .collect::<Result<Vec<_>>>()?;

    let kind = match self.kind.as_deref() {
      None => return Err(Error::MissingType),
      Some(raw) => RecordKind::from_str(raw)
        .map_err(|_| Error::UnknownType(raw.to_string()))?,
    };

    let person = Person::new(name, phone, email, address, tags);

    match kind {
      RecordKind::Person => {
        if self.has_student_fields() {
          tracing::warn!(
            name = %person.name(),
            "ignoring student-only fields on a record typed \"person\""
          );
        }
        Ok(Record::Person(person))
      }
      RecordKind::Student => {
        let details = self.into_student_details()?;
        Ok(Record::Student(Student::new(person, details)))
      }
    }
  }

  fn has_student_fields(&self) -> bool {
    self.class.is_some()
      || self.subjects.is_some()
      || self.emergency_contact.is_some()
      || self.payment_status.is_some()
      || self.assignment_status.is_some()
      || self.attendance.is_some()
  }

  /// Absent fields become empty values; only the emergency contact and the
  /// attendance entries are validated.
  fn into_student_details(self) -> Result<StudentDetails> {
    let emergency_contact = match self.emergency_contact {
      None => None,
      Some(raw) if raw.is_empty() => None,
      Some(raw) => Some(Phone::parse(raw).map_err(|_| Error::Format {
        field:   FieldKind::EmergencyContact,
        message: Phone::MESSAGE_CONSTRAINTS,
      })?),
    };

    let attendance = self
      .attendance
      .unwrap_or_default()
      .iter()
      .map(|entry| AttendanceEntry::parse(entry))
      .collect::<Result<Vec<_>>>()?;

    Ok(StudentDetails {
      class: self.class.unwrap_or_default(),
      subjects: self.subjects.unwrap_or_default(),
      emergency_contact,
      payment_status: self.payment_status.unwrap_or_default(),
      assignment_status: self.assignment_status.unwrap_or_default(),
      attendance,
    })
  }
}

/// Fail with `MissingField(kind)` when absent, otherwise run `parse`.
fn required<T, F>(raw: Option<String>, kind: FieldKind, parse: F) -> Result<T>
where
  F: FnOnce(String) -> Result<T>,
{
  raw.ok_or(Error::MissingField(kind)).and_then(parse)
}
