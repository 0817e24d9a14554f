//! `rollbook` — keep a roster of people and students in a JSON file.
//!
//! # Usage
//!
//! ```text
//! rollbook list
//! rollbook add person --name "Benson Meier" --phone 98765432 \
//!   --email johnd@example.com --address "311, Clementi Ave 2" --tag friends
//! rollbook add student --name Amy --phone 91234567 --email amy@x.com \
//!   --address "123 St" --class 10A --subject Math
//! rollbook mark 2 --status PRESENT --at 2025-10-14T10:00
//! rollbook --data-file ~/class-10a.json check
//! ```

mod commands;
mod settings;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use commands::Command;
use rollbook_store::JsonFileStore;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep a roster of people and students")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rollbook.toml")]
  config: PathBuf,

  /// Roster file to use; overrides the configuration.
  #[arg(long, value_name = "FILE")]
  data_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Diagnostics go to stderr so command output stays clean.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(&cli.config)?;
  let data_file = cli.data_file.unwrap_or(settings.data_file);
  tracing::debug!(path = %data_file.display(), "using roster file");

  let store = JsonFileStore::new(data_file);
  commands::run(cli.command, &store, &mut io::stdout().lock())
}
