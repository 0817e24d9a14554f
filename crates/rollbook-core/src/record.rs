//! Roster records — the `Person` base entity and its `Student` variant.
//!
//! Records are immutable values. Changing a record means building a new one
//! and replacing it in the [`Roster`](crate::roster::Roster).

use std::{collections::BTreeSet, fmt};

use crate::{
  attendance::AttendanceEntry,
  field::{Address, Email, Name, Phone, Tag},
};

// ─── Discriminator ───────────────────────────────────────────────────────────

/// Which variant a record is. The string forms are the on-disk discriminator.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  strum::Display,
  strum::EnumString,
  strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
  Person,
  Student,
}

impl RecordKind {
  pub fn as_str(self) -> &'static str { self.into() }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A contact with exactly five attributes, all mandatory. Equality is
/// attribute-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
  name:    Name,
  phone:   Phone,
  email:   Email,
  address: Address,
  tags:    BTreeSet<Tag>,
}

impl Person {
  pub fn new(
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: impl IntoIterator<Item = Tag>,
  ) -> Self {
    Self {
      name,
      phone,
      email,
      address,
      tags: tags.into_iter().collect(),
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn email(&self) -> &Email { &self.email }

  pub fn address(&self) -> &Address { &self.address }

  pub fn tags(&self) -> &BTreeSet<Tag> { &self.tags }

  /// Weaker notion of equality used to reject duplicates in a roster: two
  /// records describe the same person when their names match.
  pub fn is_same_person(&self, other: &Person) -> bool {
    self.name == other.name
  }
}

// ─── Student ─────────────────────────────────────────────────────────────────

/// The student-only attributes. Every field has an empty default so that a
/// stored student may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StudentDetails {
  pub class:             String,
  pub subjects:          Vec<String>,
  pub emergency_contact: Option<Phone>,
  pub payment_status:    String,
  pub assignment_status: String,
  pub attendance:        Vec<AttendanceEntry>,
}

/// A [`Person`] enrolled as a student.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
  person:  Person,
  details: StudentDetails,
}

impl Student {
  pub fn new(person: Person, details: StudentDetails) -> Self {
    Self { person, details }
  }

  /// The base attributes shared with every person.
  pub fn base(&self) -> &Person { &self.person }

  pub fn details(&self) -> &StudentDetails { &self.details }

  pub fn class(&self) -> &str { &self.details.class }

  pub fn subjects(&self) -> &[String] { &self.details.subjects }

  pub fn emergency_contact(&self) -> Option<&Phone> {
    self.details.emergency_contact.as_ref()
  }

  pub fn payment_status(&self) -> &str { &self.details.payment_status }

  pub fn assignment_status(&self) -> &str { &self.details.assignment_status }

  pub fn attendance(&self) -> &[AttendanceEntry] { &self.details.attendance }

  /// A copy of this student with `entry` appended to its attendance.
  pub fn with_attendance(&self, entry: AttendanceEntry) -> Self {
    let mut details = self.details.clone();
    details.attendance.push(entry);
    Self::new(self.person.clone(), details)
  }
}

impl AsRef<Person> for Student {
  fn as_ref(&self) -> &Person { &self.person }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A roster entry: one of the closed set of record variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
  Person(Person),
  Student(Student),
}

impl Record {
  pub fn kind(&self) -> RecordKind {
    match self {
      Self::Person(_) => RecordKind::Person,
      Self::Student(_) => RecordKind::Student,
    }
  }

  /// The base attributes, whatever the variant.
  pub fn base(&self) -> &Person {
    match self {
      Self::Person(p) => p,
      Self::Student(s) => s.base(),
    }
  }

  pub fn as_student(&self) -> Option<&Student> {
    match self {
      Self::Student(s) => Some(s),
      Self::Person(_) => None,
    }
  }

  pub fn is_same_record(&self, other: &Record) -> bool {
    self.base().is_same_person(other.base())
  }
}

impl From<Person> for Record {
  fn from(p: Person) -> Self { Self::Person(p) }
}

impl From<Student> for Record {
  fn from(s: Student) -> Self { Self::Student(s) }
}

// ─── Display ─────────────────────────────────────────────────────────────────

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
      self.name, self.phone, self.email, self.address
    )?;
    for tag in &self.tags {
      write!(f, "[{tag}]")?;
    }
    Ok(())
  }
}

impl fmt::Display for Student {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let d = &self.details;
    write!(f, "{}; Class: {}; Subjects: ", self.person, d.class)?;
    f.write_str(&d.subjects.join(", "))?;
    if let Some(contact) = &d.emergency_contact {
      write!(f, "; Emergency contact: {contact}")?;
    }
    write!(
      f,
      "; Payment: {}; Assignments: {}; Attendance: {} entr{}",
      d.payment_status,
      d.assignment_status,
      d.attendance.len(),
      if d.attendance.len() == 1 { "y" } else { "ies" },
    )
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Person(p) => write!(f, "[person] {p}"),
      Self::Student(s) => write!(f, "[student] {s}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;
  use crate::attendance::AttendanceStatus;

  fn person(name: &str, tags: &[&str]) -> Person {
    Person::new(
      Name::parse(name).unwrap(),
      Phone::parse("98765432").unwrap(),
      Email::parse("johnd@example.com").unwrap(),
      Address::parse("311, Clementi Ave 2, #02-25").unwrap(),
      tags.iter().map(|t| Tag::parse(*t).unwrap()),
    )
  }

  #[test]
  fn tags_are_a_set() {
    let p = person("Benson Meier", &["owesMoney", "friends", "friends"]);
    let tags: Vec<_> = p.tags().iter().map(Tag::as_str).collect();
    assert_eq!(tags, ["friends", "owesMoney"]);
  }

  #[test]
  fn equality_is_attribute_wise() {
    let a = person("Benson Meier", &["friends"]);
    assert_eq!(a, person("Benson Meier", &["friends"]));
    assert_ne!(a, person("Benson Meier", &[]));
    assert!(a.is_same_person(&person("Benson Meier", &[])));
    assert!(!a.is_same_person(&person("Alice Pauline", &["friends"])));
  }

  #[test]
  fn student_exposes_base_person() {
    let base = person("Amy", &[]);
    let student = Student::new(base.clone(), StudentDetails {
      class: "10A".into(),
      ..Default::default()
    });
    let record = Record::from(student);
    assert_eq!(record.kind(), RecordKind::Student);
    assert_eq!(record.base(), &base);
    assert_eq!(record.as_student().unwrap().class(), "10A");
    assert!(record.is_same_record(&Record::Person(base)));
  }

  #[test]
  fn with_attendance_appends() {
    let student = Student::new(person("Amy", &[]), StudentDetails::default());
    let entry = AttendanceEntry::parse("ABSENT,2025-10-15T09:30").unwrap();
    let updated = student.with_attendance(entry.clone());
    assert!(student.attendance().is_empty());
    assert_eq!(updated.attendance(), &[entry]);
    assert_eq!(updated.attendance()[0].status, AttendanceStatus::Absent);
  }

  #[test]
  fn kind_strings() {
    assert_eq!(RecordKind::Person.as_str(), "person");
    assert_eq!(RecordKind::Student.to_string(), "student");
    assert_eq!(RecordKind::from_str("student").unwrap(), RecordKind::Student);
    assert!(RecordKind::from_str("widget").is_err());
    assert!(RecordKind::from_str("Person").is_err());
  }

  #[test]
  fn display_branches_on_variant() {
    let p = person("Benson Meier", &["friends"]);
    assert_eq!(
      Record::Person(p.clone()).to_string(),
      "[person] Benson Meier; Phone: 98765432; Email: johnd@example.com; \
       Address: 311, Clementi Ave 2, #02-25; Tags: [friends]"
    );
    let s = Student::new(p, StudentDetails {
      class: "10A".into(),
      subjects: vec!["Math".into(), "Physics".into()],
      ..Default::default()
    });
    let shown = Record::Student(s).to_string();
    assert!(shown.starts_with("[student] Benson Meier;"));
    assert!(shown.contains("Class: 10A; Subjects: Math, Physics"));
    assert!(shown.ends_with("Attendance: 0 entries"));
  }
}
