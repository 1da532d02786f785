//! Plain-text rendering for the list and detail views.

use std::fmt::Display;

use chrono::TimeZone;
use diary_core::entry::{DiaryEntry, NewEntry};

const SUMMARY_WIDTH: usize = 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line of the list view: id, creation time, and a short summary.
pub fn list_line<Tz>(entry: &DiaryEntry, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  format!(
    "#{:<5} {}  {}",
    entry.id,
    entry.created_at.with_timezone(tz).format(TIME_FORMAT),
    summary(entry),
  )
}

/// The full detail view for a single entry.
pub fn detail<Tz>(entry: &DiaryEntry, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  let mut out = String::new();
  if !entry.title.is_empty() {
    out.push_str(&entry.title);
    out.push('\n');
  }
  out.push_str(&format!(
    "#{} · {}\n\n",
    entry.id,
    entry.created_at.with_timezone(tz).format(TIME_FORMAT),
  ));
  out.push_str(&entry.body);
  out
}

/// The draft handed back after a failed save, title included.
pub fn unsaved_draft(draft: &NewEntry) -> String {
  let mut out = String::from("Your entry was not saved:\n");
  if !draft.title.is_empty() {
    out.push_str(&draft.title);
    out.push_str("\n\n");
  }
  out.push_str(&draft.body);
  out
}

/// The title, or the first line of the body for untitled entries.
fn summary(entry: &DiaryEntry) -> String {
  let text = if entry.title.is_empty() {
    entry.body.lines().next().unwrap_or_default()
  } else {
    entry.title.as_str()
  };

  if text.chars().count() > SUMMARY_WIDTH {
    let cut: String = text.chars().take(SUMMARY_WIDTH - 1).collect();
    format!("{cut}…")
  } else {
    text.to_owned()
  }
}
