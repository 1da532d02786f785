//! [`SqliteStore`] — the SQLite implementation of [`EntryStore`].

use std::path::Path;

use chrono::Utc;
use diary_core::{
  entry::{DiaryEntry, NewEntry},
  store::EntryStore,
};
use tracing::{debug, info};

use crate::{
  Error, Result,
  encode::{RawEntry, encode_dt},
  schema::{ADD_TITLE_COLUMN, SCHEMA, SCHEMA_VERSION, TABLE},
};

/// Default database file name. Front ends append it when the configured
/// store path is a directory.
pub const DEFAULT_FILE_NAME: &str = "diary-db.sqlite3";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A diary entry store backed by a single SQLite file.
///
/// Open it once at startup and hand it to whatever needs it. Cloning is
/// cheap — the inner connection is reference-counted, and every clone shares
/// the same connection thread, so calls are applied in submission order.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and prepare the entry collection.
  ///
  /// Any failure here is reported as [`Error::Initialization`].
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(|source| Error::Initialization { path: label.clone(), source })?;
    let store = Self { conn };
    store.init_schema(label).await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let label = ":memory:".to_owned();
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(|source| Error::Initialization { path: label.clone(), source })?;
    let store = Self { conn };
    store.init_schema(label).await?;
    Ok(store)
  }

  async fn init_schema(&self, label: String) -> Result<()> {
    let upgraded = self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        let upgraded = !has_column(conn, "title")?;
        if upgraded {
          conn.execute_batch(ADD_TITLE_COLUMN)?;
        }
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(upgraded)
      })
      .await
      .map_err(|source| Error::Initialization { path: label.clone(), source })?;

    if upgraded {
      info!(path = %label, "added title column to {TABLE}");
    }
    info!(path = %label, "diary store ready");
    Ok(())
  }
}

fn has_column(conn: &rusqlite::Connection, column: &str) -> rusqlite::Result<bool> {
  let mut stmt = conn.prepare(&format!("PRAGMA table_info({TABLE})"))?;
  let names = stmt
    .query_map([], |row| row.get::<_, String>(1))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(names.iter().any(|name| name == column))
}

// ─── EntryStore impl ─────────────────────────────────────────────────────────

impl EntryStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewEntry) -> Result<DiaryEntry> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);
    let title      = input.title.clone();
    let body       = input.body.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO diaryEntries (created_at, title, body) VALUES (?1, ?2, ?3)",
          rusqlite::params![at_str, title, body],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "created diary entry");
    Ok(DiaryEntry {
      id,
      created_at,
      title: input.title,
      body: input.body,
    })
  }

  async fn list_all(&self) -> Result<Vec<DiaryEntry>> {
    let raws: Vec<RawEntry> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, created_at, title, body FROM diaryEntries ORDER BY id")?;
        let rows = stmt
          .query_map([], RawEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    debug!(count = raws.len(), "listed diary entries");
    raws.into_iter().map(RawEntry::into_entry).collect()
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM diaryEntries WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    debug!(id, removed, "deleted diary entry");
    Ok(())
  }
}
