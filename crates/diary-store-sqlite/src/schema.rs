//! SQL schema for the diary SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision.

/// Name of the single entry collection.
pub const TABLE: &str = "diaryEntries";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted
/// highest-numbered row again.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS diaryEntries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; store-assigned
    title       TEXT,            -- NULL for rows written before titles existed
    body        TEXT NOT NULL
);
";

/// Added to collections created by the body-only revision.
pub const ADD_TITLE_COLUMN: &str =
  "ALTER TABLE diaryEntries ADD COLUMN title TEXT";

pub const SCHEMA_VERSION: i64 = 1;
