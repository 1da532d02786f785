//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use chrono::{Duration, Utc};
use diary_core::{
  entry::{NewEntry, newest_first},
  store::EntryStore,
};

use crate::{DEFAULT_FILE_NAME, Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Create / list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_list_returns_the_entry() {
  let s = store().await;
  let before = Utc::now();

  let created = s.create(NewEntry::new("Day 1", "Hello")).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  let e = &all[0];
  assert_eq!(e.title, "Day 1");
  assert_eq!(e.body, "Hello");
  assert!(e.id >= 1);
  assert_eq!(e.id, created.id);
  assert_eq!(e.created_at, created.created_at);
  assert!((e.created_at - before).abs() < Duration::seconds(1));
}

#[tokio::test]
async fn list_on_fresh_store_is_empty() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_are_distinct_and_strictly_increasing() {
  let s = store().await;

  let mut ids = Vec::new();
  for n in 0..20 {
    let e = s
      .create(NewEntry::new(format!("t{n}"), format!("b{n}")))
      .await
      .unwrap();
    ids.push(e.id);
  }

  assert!(ids.windows(2).all(|w| w[0] < w[1]));

  let listed: Vec<_> = s.list_all().await.unwrap().iter().map(|e| e.id).collect();
  assert_eq!(listed, ids);
}

#[tokio::test]
async fn second_entry_sorts_first_when_newest_first() {
  let s = store().await;
  let first = s.create(NewEntry::new("First", "one")).await.unwrap();
  let second = s.create(NewEntry::new("Second", "two")).await.unwrap();
  assert!(second.id > first.id);

  let mut all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  newest_first(&mut all);
  assert_eq!(all[0].id, second.id);
  assert_eq!(all[0].title, "Second");
  assert_eq!(all[1].id, first.id);
}

#[tokio::test]
async fn untitled_entry_roundtrips_with_empty_title() {
  let s = store().await;
  s.create(NewEntry::untitled("just a body")).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all[0].title, "");
  assert_eq!(all[0].body, "just a body");
}

#[tokio::test]
async fn unicode_and_multiline_bodies_are_preserved() {
  let s = store().await;
  let body = "línea uno\nline two — 日記\n\n  indented";
  s.create(NewEntry::new("Ünïcode", body)).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all[0].title, "Ünïcode");
  assert_eq!(all[0].body, body);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_the_entry() {
  let s = store().await;
  let e = s.create(NewEntry::new("Gone", "soon")).await.unwrap();

  s.delete_by_id(e.id).await.unwrap();

  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
  let s = store().await;
  let keep = s.create(NewEntry::new("Keep", "me")).await.unwrap();
  let gone = s.create(NewEntry::new("Drop", "me")).await.unwrap();

  s.delete_by_id(gone.id).await.unwrap();
  s.delete_by_id(gone.id).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, keep.id);
}

#[tokio::test]
async fn delete_missing_id_on_empty_store_succeeds() {
  let s = store().await;
  s.delete_by_id(999).await.unwrap();
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_are_not_reused_after_deleting_the_newest() {
  let s = store().await;
  s.create(NewEntry::untitled("a")).await.unwrap();
  let b = s.create(NewEntry::untitled("b")).await.unwrap();

  s.delete_by_id(b.id).await.unwrap();
  let c = s.create(NewEntry::untitled("c")).await.unwrap();

  assert!(c.id > b.id);
}

// ─── Durability ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn entries_survive_reopening_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_FILE_NAME);

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(NewEntry::new("Persisted", "still here")).await.unwrap()
  };

  let reopened = SqliteStore::open(&path).await.unwrap();
  let all = reopened.list_all().await.unwrap();
  assert_eq!(all, vec![created.clone()]);

  // The id sequence carries over as well.
  let next = reopened.create(NewEntry::untitled("after")).await.unwrap();
  assert!(next.id > created.id);
}

#[tokio::test]
async fn body_only_collection_is_upgraded_in_place() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_FILE_NAME);

  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE diaryEntries (
           id         INTEGER PRIMARY KEY AUTOINCREMENT,
           created_at TEXT NOT NULL,
           body       TEXT NOT NULL
         );
         INSERT INTO diaryEntries (created_at, body)
           VALUES ('2023-06-01T08:30:00+00:00', 'written before titles');",
      )
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  s.create(NewEntry::new("New", "with a title")).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].title, "");
  assert_eq!(all[0].body, "written before titles");
  assert_eq!(all[1].title, "New");
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unopenable_path_is_an_initialization_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);

  let err = match SqliteStore::open(&path).await {
    Ok(_) => panic!("opening inside a missing directory should fail"),
    Err(e) => e,
  };
  assert!(matches!(err, Error::Initialization { .. }));

  let core: diary_core::Error = err.into();
  assert!(core.is_initialization());
}

#[tokio::test]
async fn undecodable_row_is_a_storage_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_FILE_NAME);

  let s = SqliteStore::open(&path).await.unwrap();
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute(
        "INSERT INTO diaryEntries (created_at, title, body) VALUES ('not a date', 't', 'b')",
        [],
      )
      .unwrap();
  }

  let err = s.list_all().await.unwrap_err();
  assert!(matches!(err, Error::DateParse(_)));

  let core: diary_core::Error = err.into();
  assert!(!core.is_initialization());
}

#[tokio::test]
async fn initialization_error_leaves_detail_to_its_source() {
  use std::error::Error as _;

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);

  let Err(err) = SqliteStore::open(&path).await else {
    panic!("opening inside a missing directory should fail");
  };
  let source = err.source().expect("sqlite cause").to_string();
  assert!(!err.to_string().contains(&source));
  assert!(err.to_string().contains("missing"));
}
