//! Conversions between domain types and the plain-text values stored in
//! SQLite columns. Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use diary_core::entry::DiaryEntry;

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Raw values read directly from a `diaryEntries` row.
pub struct RawEntry {
  pub id:         i64,
  pub created_at: String,
  pub title:      Option<String>,
  pub body:       String,
}

impl RawEntry {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      created_at: row.get(1)?,
      title:      row.get(2)?,
      body:       row.get(3)?,
    })
  }

  pub fn into_entry(self) -> Result<DiaryEntry> {
    Ok(DiaryEntry {
      id:         self.id,
      created_at: decode_dt(&self.created_at)?,
      title:      self.title.unwrap_or_default(),
      body:       self.body,
    })
  }
}
