//! Subcommands and their execution against a [`RosterStore`].

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime, Timelike};
use clap::{Args, Subcommand};
use rollbook_core::{
  attendance::{AttendanceEntry, AttendanceStatus},
  field::{Address, Email, Name, Phone, Tag},
  record::{Person, Record, Student, StudentDetails},
  roster::Roster,
  store::RosterStore,
};

// ─── Arguments ───────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Print every record with its index.
  List,

  /// Add a new record.
  #[command(subcommand)]
  Add(AddCommand),

  /// Delete the record at INDEX (1-based, as shown by `list`).
  Delete { index: usize },

  /// Append an attendance entry to the student at INDEX.
  Mark {
    index:  usize,
    /// PRESENT, ABSENT, LATE or EXCUSED.
    #[arg(long)]
    status: AttendanceStatus,
    /// YYYY-MM-DDTHH:MM[:SS]; defaults to the current minute.
    #[arg(long, value_parser = parse_timestamp)]
    at:     Option<NaiveDateTime>,
  },

  /// Load the roster file and report whether it is valid.
  Check,

  /// Remove every record.
  Clear,
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
  Person(PersonArgs),
  Student(StudentArgs),
}

#[derive(Args, Debug)]
pub struct PersonArgs {
  #[arg(long)]
  name:    Name,
  #[arg(long)]
  phone:   Phone,
  #[arg(long)]
  email:   Email,
  #[arg(long)]
  address: Address,
  /// May be repeated.
  #[arg(long = "tag")]
  tags:    Vec<Tag>,
}

#[derive(Args, Debug)]
pub struct StudentArgs {
  #[command(flatten)]
  person:            PersonArgs,
  #[arg(long, default_value = "")]
  class:             String,
  /// May be repeated; order is kept.
  #[arg(long = "subject")]
  subjects:          Vec<String>,
  #[arg(long)]
  emergency_contact: Option<Phone>,
  #[arg(long, default_value = "")]
  payment_status:    String,
  #[arg(long, default_value = "")]
  assignment_status: String,
  /// "STATUS,TIMESTAMP"; may be repeated.
  #[arg(long)]
  attendance:        Vec<AttendanceEntry>,
}

impl PersonArgs {
  fn into_person(self) -> Person {
    Person::new(self.name, self.phone, self.email, self.address, self.tags)
  }
}

impl StudentArgs {
  fn into_student(self) -> Student {
    Student::new(self.person.into_person(), StudentDetails {
      class:             self.class,
      subjects:          self.subjects,
      emergency_contact: self.emergency_contact,
      payment_status:    self.payment_status,
      assignment_status: self.assignment_status,
      attendance:        self.attendance,
    })
  }
}

impl AddCommand {
  fn into_record(self) -> Record {
    match self {
      Self::Person(args) => Record::Person(args.into_person()),
      Self::Student(args) => Record::Student(args.into_student()),
    }
  }
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
  rollbook_core::attendance::parse_timestamp(s)
    .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS], got {s:?}"))
}

/// Convert a 1-based index from the command line.
fn zero_based(index: usize) -> Result<usize> {
  match index.checked_sub(1) {
    Some(i) => Ok(i),
    None => bail!("indices start at 1"),
  }
}

fn current_minute() -> NaiveDateTime {
  let now = Local::now().naive_local();
  now
    .with_second(0)
    .and_then(|t| t.with_nanosecond(0))
    .unwrap_or(now)
}

// ─── Execution ───────────────────────────────────────────────────────────────

/// Run `command` against `store`, writing user-facing output to `out`.
pub fn run<S, W>(command: Command, store: &S, out: &mut W) -> Result<()>
where
  S: RosterStore,
  W: std::io::Write,
{
  match command {
    Command::List => {
      let roster = load(store)?;
      if roster.is_empty() {
        writeln!(out, "No records.")?;
      }
      for (i, record) in roster.iter().enumerate() {
        writeln!(out, "{}. {record}", i + 1)?;
      }
    }

    Command::Add(add) => {
      let mut roster = load(store)?;
      let record = add.into_record();
      roster
        .add(record.clone())
        .context("cannot add record")?;
      save(store, &roster)?;
      writeln!(out, "Added: {record}")?;
    }

    Command::Delete { index } => {
      let mut roster = load(store)?;
      let removed = roster
        .remove(zero_based(index)?)
        .context("cannot delete record")?;
      save(store, &roster)?;
      writeln!(out, "Deleted: {removed}")?;
    }

    Command::Mark { index, status, at } => {
      let mut roster = load(store)?;
      let entry = AttendanceEntry::new(status, at.unwrap_or_else(current_minute));
      let i = zero_based(index)?;
      roster
        .mark_attendance(i, entry.clone())
        .context("cannot mark attendance")?;
      save(store, &roster)?;
      let name = roster.get(i).map(|r| r.base().name().to_string());
      writeln!(out, "Marked {entry} for {}", name.unwrap_or_default())?;
    }

    Command::Check => match store.load() {
      Ok(Some(roster)) => writeln!(
        out,
        "{}: {} record(s), all valid",
        store.path().display(),
        roster.len()
      )?,
      Ok(None) => {
        writeln!(out, "{}: no roster file yet", store.path().display())?
      }
      Err(e) => return Err(e).context("roster file is invalid"),
    },

    Command::Clear => {
      save(store, &Roster::new())?;
      writeln!(out, "Roster cleared.")?;
    }
  }
  Ok(())
}

/// Load the stored roster, starting empty when there is no file yet.
fn load<S: RosterStore>(store: &S) -> Result<Roster> {
  let roster = store.load().with_context(|| {
    format!("failed to load roster from {}", store.path().display())
  })?;
  Ok(roster.unwrap_or_default())
}

fn save<S: RosterStore>(store: &S, roster: &Roster) -> Result<()> {
  store
    .save(roster)
    .with_context(|| format!("failed to save roster to {}", store.path().display()))
}
