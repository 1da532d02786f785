//! The `EntryStore` trait.
//!
//! Implemented by storage backends (e.g. `diary-store-sqlite`). The front end
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::entry::{DiaryEntry, NewEntry};

/// Abstraction over a durable diary entry collection.
///
/// Entries are immutable: the only lifecycle transitions are create and
/// delete. There is deliberately no update method.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait EntryStore: Send + Sync {
  /// Backend error; every backend error classifies as either an
  /// initialisation or a storage failure.
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Persist a new entry and return it with its assigned `id` and
  /// `created_at`.
  fn create(
    &self,
    input: NewEntry,
  ) -> impl Future<Output = Result<DiaryEntry, Self::Error>> + Send + '_;

  /// Every stored entry, in storage order. Not necessarily chronological;
  /// see [`crate::entry::newest_first`].
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<DiaryEntry>, Self::Error>> + Send + '_;

  /// Ensure no entry with `id` exists. Deleting an absent id succeeds.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
