//! [`JsonFileStore`] — the JSON-file implementation of [`RosterStore`].

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use rollbook_core::{roster::Roster, store::RosterStore};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster persisted as a single JSON file.
///
/// Every load re-reads and re-parses the whole file; every save rewrites it.
/// Nothing guards against a second writer.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn io_error(&self, source: io::Error) -> Error {
    Error::Io {
      path: self.path.clone(),
      source,
    }
  }
}

impl RosterStore for JsonFileStore {
  type Error = Error;

  fn path(&self) -> &Path { &self.path }

  fn load(&self) -> Result<Option<Roster>> {
    let text = match fs::read_to_string(&self.path) {
      Ok(text) => text,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        tracing::debug!(path = %self.path.display(), "no roster file yet");
        return Ok(None);
      }
      Err(e) => return Err(self.io_error(e)),
    };

    let roster =
      rollbook_json::roster_from_str(&text).map_err(|source| Error::Format {
        path: self.path.clone(),
        source,
      })?;

    tracing::info!(
      path = %self.path.display(),
      records = roster.len(),
      "loaded roster"
    );
    Ok(Some(roster))
  }

  fn save(&self, roster: &Roster) -> Result<()> {
    let text =
      rollbook_json::roster_to_string(roster).map_err(|source| Error::Format {
        path: self.path.clone(),
        source,
      })?;

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
    }
    fs::write(&self.path, text).map_err(|e| self.io_error(e))?;

    tracing::info!(
      path = %self.path.display(),
      records = roster.len(),
      "saved roster"
    );
    Ok(())
  }
}
