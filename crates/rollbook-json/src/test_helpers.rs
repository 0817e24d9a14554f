//! Typical records shared by the codec tests.

use rollbook_core::{
  attendance::AttendanceEntry,
  field::{Address, Email, Name, Phone, Tag},
  record::{Person, Record, Student, StudentDetails},
};
use serde_json::Value;

use crate::JsonAdaptedRecord;

pub(crate) fn person(
  name: &str,
  phone: &str,
  email: &str,
  address: &str,
  tags: &[&str],
) -> Person {
  Person::new(
    Name::parse(name).unwrap(),
    Phone::parse(phone).unwrap(),
    Email::parse(email).unwrap(),
    Address::parse(address).unwrap(),
    tags.iter().map(|t| Tag::parse(*t).unwrap()),
  )
}

pub(crate) fn benson() -> Person {
  person(
    "Benson Meier",
    "98765432",
    "johnd@example.com",
    "311, Clementi Ave 2, #02-25",
    &["owesMoney", "friends"],
  )
}

pub(crate) fn alice() -> Person {
  person(
    "Alice Pauline",
    "94351253",
    "alice@example.com",
    "123, Jurong West Ave 6, #08-111",
    &["friends"],
  )
}

pub(crate) fn carl() -> Person {
  person(
    "Carl Kurz",
    "95352563",
    "heinz@example.com",
    "wall street",
    &[],
  )
}

pub(crate) fn student_details() -> StudentDetails {
  StudentDetails {
    class:             "10A".to_string(),
    subjects:          vec!["Math".to_string(), "Physics".to_string()],
    emergency_contact: Some(Phone::parse("91234567").unwrap()),
    payment_status:    "Paid".to_string(),
    assignment_status: "Completed".to_string(),
    attendance:        vec![
      AttendanceEntry::parse("PRESENT,2025-10-14T10:00").unwrap(),
      AttendanceEntry::parse("LATE,2025-10-21T10:07:30").unwrap(),
    ],
  }
}

pub(crate) fn daniel_student() -> Student {
  Student::new(
    person(
      "Daniel Meier",
      "87652533",
      "cornelia@example.com",
      "10th street",
      &["friends"],
    ),
    student_details(),
  )
}

pub(crate) fn amy_student() -> Record {
  Record::Student(Student::new(
    person("Amy", "91234567", "amy@x.com", "123 St", &[]),
    StudentDetails::default(),
  ))
}

/// Deserialize a flat record straight from a `json!` literal.
pub(crate) fn flat(value: Value) -> JsonAdaptedRecord {
  serde_json::from_value(value).expect("flat record shape")
}

/// A valid person-typed flat record as JSON; tests knock fields out of it.
pub(crate) fn valid_person_json() -> Value {
  serde_json::json!({
    "type":    "person",
    "name":    "Benson Meier",
    "phone":   "98765432",
    "email":   "johnd@example.com",
    "address": "311, Clementi Ave 2, #02-25",
    "tags":    ["friends", "owesMoney"],
  })
}

/// [`valid_person_json`] as it is written back: student-only keys are `null`.
pub(crate) fn stored_person_json() -> Value {
  let mut value = valid_person_json();
  let obj = value.as_object_mut().unwrap();
  for key in [
    "class",
    "subjects",
    "emergencyContact",
    "paymentStatus",
    "assignmentStatus",
    "attendance",
  ] {
    obj.insert(key.to_string(), Value::Null);
  }
  value
}
