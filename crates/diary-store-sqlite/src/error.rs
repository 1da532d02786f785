//! Error type for `diary-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Opening the database or preparing the entry collection failed.
  #[error("cannot initialise diary database at {path}")]
  Initialization {
    path:   String,
    #[source]
    source: tokio_rusqlite::Error,
  },

  #[error("database error")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl From<Error> for diary_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Initialization { .. } => Self::initialization(e),
      Error::Database(_) | Error::DateParse(_) => Self::storage(e),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
