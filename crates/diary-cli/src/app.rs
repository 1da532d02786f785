//! Session state shared by every `diary` command: the compose draft, the
//! current snapshot of entries, and a one-line status message.
//!
//! The snapshot is never patched in place. Every confirmed mutation is
//! followed by a full re-fetch, so what is shown always matches the store.

use std::sync::Arc;

use diary_core::{
  Error,
  entry::{DiaryEntry, NewEntry, newest_first},
  store::EntryStore,
};
use tracing::{debug, warn};

// ─── Loaded ───────────────────────────────────────────────────────────────────

/// The last result of listing the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
  /// All entries, newest first.
  Entries(Vec<DiaryEntry>),
  /// Listing failed. Kept distinct from an empty diary so a storage fault is
  /// never shown as "no entries".
  Failed(String),
}

// ─── App ──────────────────────────────────────────────────────────────────────

pub struct App<S: EntryStore> {
  /// Compose form contents. Cleared only after the store confirms the write.
  pub draft: NewEntry,

  /// Snapshot from the most recent refresh.
  pub entries: Loaded,

  /// One-line status message.
  pub status_msg: String,

  store: Arc<S>,
}

impl<S: EntryStore> App<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      draft: NewEntry::default(),
      entries: Loaded::Entries(Vec::new()),
      status_msg: String::new(),
      store,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Replace the snapshot with the store's current contents.
  pub async fn refresh(&mut self) -> Result<(), Error> {
    match self.store.list_all().await {
      Ok(mut entries) => {
        newest_first(&mut entries);
        debug!(count = entries.len(), "refreshed entries");
        self.entries = Loaded::Entries(entries);
        Ok(())
      }
      Err(e) => {
        let e: Error = e.into();
        warn!(error = %e, "could not load entries");
        self.entries = Loaded::Failed(describe(&e));
        self.status_msg = "Could not load entries".into();
        Err(e)
      }
    }
  }

  /// Entries in the current snapshot; empty if the last load failed.
  pub fn entries(&self) -> &[DiaryEntry] {
    match &self.entries {
      Loaded::Entries(entries) => entries,
      Loaded::Failed(_) => &[],
    }
  }

  /// Look up an entry in the current snapshot for the detail view.
  pub fn select(&self, id: i64) -> Option<&DiaryEntry> {
    self.entries().iter().find(|e| e.id == id)
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Save the draft.
  ///
  /// A blank draft is not written and yields `Ok(None)`. On a failed write
  /// the draft is left untouched so nothing typed is lost.
  pub async fn submit(&mut self) -> Result<Option<DiaryEntry>, Error> {
    if self.draft.is_blank() {
      self.status_msg = "Nothing to save".into();
      return Ok(None);
    }

    let created = match self.store.create(self.draft.clone()).await {
      Ok(entry) => entry,
      Err(e) => {
        let e: Error = e.into();
        warn!(error = %e, "entry not saved");
        self.status_msg = format!("Error: {}", describe(&e));
        return Err(e);
      }
    };

    self.draft = NewEntry::default();
    self.status_msg = format!("Saved entry #{}", created.id);
    // The write is confirmed; a failed re-fetch only shows up in `entries`.
    self.refresh().await.ok();
    Ok(Some(created))
  }

  /// Delete an entry. Deleting one that is already gone is not an error.
  pub async fn delete(&mut self, id: i64) -> Result<(), Error> {
    if let Err(e) = self.store.delete_by_id(id).await {
      let e: Error = e.into();
      self.status_msg = format!("Error: {}", describe(&e));
      return Err(e);
    }
    self.status_msg = format!("Deleted entry #{id}");
    self.refresh().await.ok();
    Ok(())
  }
}

/// An error and each of its causes, joined into one line.
pub fn describe(e: &Error) -> String {
  let mut chain = vec![e.to_string()];
  let mut cause = std::error::Error::source(e);
  while let Some(c) = cause {
    chain.push(c.to_string());
    cause = c.source();
  }
  chain.join(": ")
}
