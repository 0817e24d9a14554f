//! Error type for `rollbook-store`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The file was read but its contents are not a valid roster.
  #[error("invalid roster file {}: {source}", path.display())]
  Format {
    path:   PathBuf,
    #[source]
    source: rollbook_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
