//! Domain model for the Rollbook roster.
//!
//! Validated field types, the `Person` / `Student` records and the `Roster`
//! that holds them. This crate knows nothing about JSON or files; the
//! persistence seam is the [`store::RosterStore`] trait.

pub mod attendance;
pub mod error;
pub mod field;
pub mod record;
pub mod roster;
pub mod store;

pub use error::{Error, Result};
