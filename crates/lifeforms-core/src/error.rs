//! Error types for `lifeforms-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The id cell of a display row is not a valid integer.
  #[error("invalid record id {0:?}")]
  InvalidId(String),

  #[error("display row has {found} cells, expected {expected}")]
  RowWidth { expected: usize, found: usize },

  /// An operation that targets a row was requested with no row selected.
  #[error("no life form selected; please choose a Wonderful Life Form first")]
  NoSelection,

  #[error("group index {index} out of range ({len} groups)")]
  UnknownGroup { index: usize, len: usize },
}

impl Error {
  /// Whether the error comes from reading a display row back into a record.
  #[cfg(test)]
  pub fn is_parse(&self) -> bool {
    matches!(self, Error::InvalidId(_) | Error::RowWidth { .. })
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
