//! Error taxonomy shared by every diary backend and front end.

use thiserror::Error;

/// A boxed backend error carried as the source of an [`Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// The database could not be opened or the entry collection could not be
  /// created. Every other operation depends on this succeeding.
  #[error("diary store could not be initialised")]
  Initialization(#[source] BoxError),

  /// A single create / list / delete failed on an initialised store. The
  /// caller may retry the same operation.
  #[error("diary storage operation failed")]
  Storage(#[source] BoxError),
}

impl Error {
  pub fn initialization(e: impl Into<BoxError>) -> Self {
    Self::Initialization(e.into())
  }

  pub fn storage(e: impl Into<BoxError>) -> Self { Self::Storage(e.into()) }

  pub fn is_initialization(&self) -> bool {
    matches!(self, Self::Initialization(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
