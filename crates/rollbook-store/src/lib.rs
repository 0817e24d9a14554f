//! File backend for the Rollbook roster.
//!
//! One JSON document per roster, read in full on load and rewritten in full
//! on save. Encoding is delegated to [`rollbook_json`].

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;

#[cfg(test)]
mod tests;
