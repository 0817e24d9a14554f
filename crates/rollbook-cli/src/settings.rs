//! Runtime settings: an optional TOML file layered under `ROLLBOOK_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_DATA_FILE: &str = "data/rollbook.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Where the roster JSON lives.
  pub data_file: PathBuf,
}

impl Settings {
  /// Read `config_path` (if it exists) and the environment.
  pub fn load(config_path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("data_file", DEFAULT_DATA_FILE)?
      .add_source(config::File::from(config_path).required(false))
      .add_source(config::Environment::with_prefix("ROLLBOOK"))
      .build()
      .with_context(|| format!("failed to read {}", config_path.display()))?;

    let mut settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    settings.data_file = expand_tilde(&settings.data_file);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
