//! [`Roster`] — the ordered in-memory collection of records.

use crate::{
  Error, Result,
  attendance::AttendanceEntry,
  record::Record,
};

/// Every record the application knows about, in insertion order. No two
/// records may describe the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
  records: Vec<Record>,
}

impl Roster {
  pub fn new() -> Self { Self::default() }

  /// Build a roster from `records`, rejecting the first duplicate.
  pub fn from_records(
    records: impl IntoIterator<Item = Record>,
  ) -> Result<Self> {
    let mut roster = Self::new();
    for record in records {
      roster.add(record)?;
    }
    Ok(roster)
  }

  pub fn records(&self) -> &[Record] { &self.records }

  pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn get(&self, index: usize) -> Option<&Record> { self.records.get(index) }

  /// Whether a record describing the same person is already present.
  pub fn contains(&self, record: &Record) -> bool {
    self.records.iter().any(|r| r.is_same_record(record))
  }

  /// Append `record`. Fails if the same person is already on the roster.
  pub fn add(&mut self, record: Record) -> Result<()> {
    if self.contains(&record) {
      return Err(Error::DuplicateRecord(record.base().name().to_string()));
    }
    self.records.push(record);
    Ok(())
  }

  /// Remove and return the record at zero-based `index`.
  pub fn remove(&mut self, index: usize) -> Result<Record> {
    self.check_index(index)?;
    Ok(self.records.remove(index))
  }

  /// Replace the record at `index`. The replacement may keep the same
  /// person but must not collide with any *other* record.
  pub fn replace(&mut self, index: usize, record: Record) -> Result<Record> {
    self.check_index(index)?;
    let collides = self
      .records
      .iter()
      .enumerate()
      .any(|(i, r)| i != index && r.is_same_record(&record));
    if collides {
      return Err(Error::DuplicateRecord(record.base().name().to_string()));
    }
    Ok(std::mem::replace(&mut self.records[index], record))
  }

  /// Append `entry` to the attendance of the student at `index`.
  pub fn mark_attendance(
    &mut self,
    index: usize,
    entry: AttendanceEntry,
  ) -> Result<()> {
    self.check_index(index)?;
    let student = self.records[index]
      .as_student()
      .ok_or(Error::NotAStudent(index))?;
    let updated = Record::Student(student.with_attendance(entry));
    self.replace(index, updated)?;
    Ok(())
  }

  pub fn clear(&mut self) { self.records.clear(); }

  fn check_index(&self, index: usize) -> Result<()> {
    if index < self.records.len() {
      Ok(())
    } else {
      Err(Error::IndexOutOfRange {
        index,
        len: self.records.len(),
      })
    }
  }
}

impl<'a> IntoIterator for &'a Roster {
  type IntoIter = std::slice::Iter<'a, Record>;
  type Item = &'a Record;

  fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
