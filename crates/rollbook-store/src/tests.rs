//! Tests for `JsonFileStore` against a temporary directory.

use std::fs;

use rollbook_core::{
  field::{Address, Email, Name, Phone, Tag},
  record::{Person, Record, Student, StudentDetails},
  roster::Roster,
  store::RosterStore,
};
use tempfile::TempDir;

use crate::{Error, JsonFileStore};

fn person(name: &str) -> Person {
  Person::new(
    Name::parse(name).unwrap(),
    Phone::parse("98765432").unwrap(),
    Email::parse("johnd@example.com").unwrap(),
    Address::parse("311, Clementi Ave 2, #02-25").unwrap(),
    [Tag::parse("friends").unwrap()],
  )
}

fn roster() -> Roster {
  Roster::from_records([
    Record::Person(person("Benson Meier")),
    Record::Student(Student::new(person("Amy"), StudentDetails {
      class: "10A".into(),
      ..Default::default()
    })),
  ])
  .unwrap()
}

#[test]
fn missing_file_loads_as_none() {
  let dir = TempDir::new().unwrap();
  let store = JsonFileStore::new(dir.path().join("rollbook.json"));
  assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_reproduces_roster() {
  let dir = TempDir::new().unwrap();
  let store = JsonFileStore::new(dir.path().join("rollbook.json"));

  store.save(&roster()).unwrap();
  assert_eq!(store.load().unwrap(), Some(roster()));
}

#[test]
fn save_creates_parent_directories() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("nested").join("data").join("rollbook.json");
  let store = JsonFileStore::new(&path);

  store.save(&Roster::new()).unwrap();
  assert!(path.is_file());
  assert_eq!(store.path(), path);
}

#[test]
fn save_rewrites_whole_file() {
  let dir = TempDir::new().unwrap();
  let store = JsonFileStore::new(dir.path().join("rollbook.json"));

  store.save(&roster()).unwrap();
  store.save(&Roster::new()).unwrap();

  let text = fs::read_to_string(store.path()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&text).unwrap();
  assert_eq!(value, serde_json::json!({ "persons": [] }));
  assert_eq!(store.load().unwrap(), Some(Roster::new()));
}

#[test]
fn invalid_record_fails_whole_load() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("rollbook.json");
  fs::write(
    &path,
    r#"{ "persons": [
      { "type": "person", "name": "Benson Meier", "phone": "98765432",
        "email": "johnd@example.com", "address": "Clementi", "tags": [] },
      { "type": "widget", "name": "Amy", "phone": "91234567",
        "email": "amy@x.com", "address": "123 St", "tags": [] }
    ] }"#,
  )
  .unwrap();

  let err = JsonFileStore::new(&path).load().unwrap_err();
  let Error::Format { source, .. } = &err else {
    panic!("expected Format, got {err:?}")
  };
  assert!(matches!(
    source,
    rollbook_json::Error::InvalidEntry { position: 2, .. }
  ));
  assert!(err.to_string().contains("roster entry 2 is invalid"));
}

#[test]
fn unreadable_path_is_io_error() {
  let dir = TempDir::new().unwrap();
  // a directory cannot be read as a file
  let err = JsonFileStore::new(dir.path()).load().unwrap_err();
  assert!(matches!(err, Error::Io { .. }));
}
