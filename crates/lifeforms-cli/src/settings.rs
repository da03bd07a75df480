//! Settings file handling.
//!
//! Settings come from an optional TOML file, then `LIFEFORMS_*` environment
//! variables, then command-line flags (applied by `main`).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use lifeforms_core::catalog::Catalog;
use lifeforms_store_sqlite::DEFAULT_DB_FILE;
use serde::Deserialize;

/// Default settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lifeforms.toml";

/// Shape of the settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// SQLite database file.
  pub database:     PathBuf,
  /// Where tracing output is appended.
  pub log_file:     PathBuf,
  /// Pad every grid cell with two spaces on each side.
  pub padded_cells: bool,
  pub catalog:      Catalog,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      database:     PathBuf::from(DEFAULT_DB_FILE),
      log_file:     PathBuf::from("lifeforms.log"),
      padded_cells: false,
      catalog:      Catalog::default(),
    }
  }
}

impl Settings {
  /// Load settings from `path` (which must exist) or, if `None`, from
  /// [`DEFAULT_CONFIG_FILE`] when present.
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    let file = match path {
      Some(p) => config::File::from(p.to_path_buf()).required(true),
      None => config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false),
    };

    let settings = config::Config::builder()
      .add_source(file)
      .add_source(config::Environment::with_prefix("LIFEFORMS"))
      .build()
      .context("failed to read settings")?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
