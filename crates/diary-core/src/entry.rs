//! Diary entries — the only entity the store knows about.
//!
//! An entry is immutable once written. The store assigns `id` and
//! `created_at`; callers supply only the [`NewEntry`] fields.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── DiaryEntry ──────────────────────────────────────────────────────────────

/// A persisted diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
  /// Store-assigned, strictly increasing, never reused.
  pub id:         i64,
  /// Store-assigned insertion time; never changes after creation.
  pub created_at: DateTime<Utc>,
  /// Entries written before titles existed read back with an empty title.
  #[serde(default)]
  pub title:      String,
  pub body:       String,
}

// ─── NewEntry ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::EntryStore::create`].
/// `id` and `created_at` are always set by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
  pub title: String,
  pub body:  String,
}

impl NewEntry {
  pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self { title: title.into(), body: body.into() }
  }

  /// A body-only entry, as written by the pre-title revision of the diary.
  pub fn untitled(body: impl Into<String>) -> Self {
    Self::new(String::new(), body)
  }

  /// True when there is nothing worth saving.
  pub fn is_blank(&self) -> bool { self.body.trim().is_empty() }
}

// ─── Ordering ────────────────────────────────────────────────────────────────

/// Sort entries for display: most recent first.
///
/// Ties on `created_at` (two writes within the clock's resolution) fall back
/// to `id`, which always follows insertion order.
pub fn newest_first(entries: &mut [DiaryEntry]) {
  entries.sort_by_key(|e| Reverse((e.created_at, e.id)));
}
