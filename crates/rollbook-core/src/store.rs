//! The `RosterStore` trait.
//!
//! Implemented by persistence backends (e.g. `rollbook-store`). The CLI
//! depends on this abstraction, not on any concrete backend.

use std::path::Path;

use crate::roster::Roster;

/// Abstraction over where a roster lives between runs.
///
/// Both operations are whole-roster: `load` reads everything back, `save`
/// rewrites everything. There is no incremental update and no locking; a
/// single writer per store is assumed.
pub trait RosterStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Where the roster is persisted.
  fn path(&self) -> &Path;

  /// Read the stored roster. Returns `Ok(None)` if nothing has been saved
  /// yet. Any invalid record fails the whole load.
  fn load(&self) -> Result<Option<Roster>, Self::Error>;

  /// Replace the stored roster with `roster`.
  fn save(&self, roster: &Roster) -> Result<(), Self::Error>;
}
