//! SQLite backend for the diary entry store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_FILE_NAME, SqliteStore};

#[cfg(test)]
mod tests;
