//! Error type for `lifeforms-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database file could not be opened.
  #[error("could not open database {path:?}: {source}")]
  Open {
    path:   PathBuf,
    #[source]
    source: rusqlite::Error,
  },

  /// The schema could not be created.
  #[error("could not initialise schema: {0}")]
  Bootstrap(#[source] rusqlite::Error),

  /// A statement failed after startup.
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),
}

impl Error {
  /// Whether the process must stop instead of carrying on.
  #[cfg(test)]
  pub fn is_fatal(&self) -> bool {
    matches!(self, Error::Open { .. } | Error::Bootstrap(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
