//! `diary` — compose, browse, and delete diary entries from the terminal.
//!
//! # Usage
//!
//! ```text
//! diary add --title "Day 1" "Hello"
//! echo "Long entry" | diary add
//! diary list
//! diary show 3
//! diary delete 3
//! ```

mod app;
mod settings;
mod ui;

use std::{
  io::{self, Read as _},
  path::PathBuf,
  sync::Arc,
};

use anyhow::{Context as _, Result, bail};
use app::App;
use chrono::Local;
use clap::{Parser, Subcommand};
use diary_core::{
  entry::{DiaryEntry, NewEntry},
  store::EntryStore,
};
use diary_store_sqlite::SqliteStore;
use settings::CliConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "diary", version, about = "A personal diary kept in a local database")]
struct Cli {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "diary.toml")]
  config: PathBuf,

  /// Database file; overrides the config file and `DIARY_STORE_PATH`.
  #[arg(long, value_name = "PATH")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Write a new entry. The body is read from stdin when not given.
  Add {
    #[arg(short, long, default_value = "")]
    title: String,
    body:  Option<String>,
  },
  /// List all entries, newest first.
  List {
    #[arg(long)]
    json: bool,
  },
  /// Show a single entry in full.
  Show {
    id: i64,
    #[arg(long)]
    json: bool,
  },
  /// Delete an entry. Deleting an entry that does not exist succeeds.
  Delete { id: i64 },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let store_path = CliConfig::load(&cli.config, cli.store.as_deref())?.store_path;

  if let Some(dir) = store_path.parent().filter(|d| !d.as_os_str().is_empty()) {
    std::fs::create_dir_all(dir)
      .with_context(|| format!("creating data directory {}", dir.display()))?;
  }

  let store = SqliteStore::open(&store_path)
    .await
    .map_err(diary_core::Error::from)
    .with_context(|| format!("diary is unavailable: cannot open {}", store_path.display()))?;

  let mut app = App::new(Arc::new(store));
  run(&mut app, cli.command).await
}

async fn run(app: &mut App<SqliteStore>, command: Command) -> Result<()> {
  match command {
    Command::Add { title, body } => {
      let body = match body {
        Some(body) => body,
        None => {
          let mut buf = String::new();
          io::stdin()
            .read_to_string(&mut buf)
            .context("reading entry from stdin")?;
          buf
        }
      };
      let entry = add(app, NewEntry::new(title, body)).await?;
      println!("Saved entry #{}", entry.id);
    }

    Command::List { json } => {
      load(app).await?;
      if json {
        println!("{}", serde_json::to_string_pretty(app.entries())?);
      } else if app.entries().is_empty() {
        println!("No entries yet.");
      } else {
        for entry in app.entries() {
          println!("{}", ui::list_line(entry, &Local));
        }
      }
    }

    Command::Show { id, json } => {
      load(app).await?;
      let Some(entry) = app.select(id) else {
        bail!("no entry with id {id}");
      };
      if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
      } else {
        println!("{}", ui::detail(entry, &Local));
      }
    }

    Command::Delete { id } => {
      app.delete(id).await.context("deleting entry")?;
      println!("{}", app.status_msg);
    }
  }

  Ok(())
}

/// Save `draft`. A blank draft is an error so scripts see a non-zero exit.
async fn add<S: EntryStore>(app: &mut App<S>, draft: NewEntry) -> Result<DiaryEntry> {
  app.draft = draft;
  match app.submit().await {
    Ok(Some(entry)) => Ok(entry),
    Ok(None) => bail!("{}: the entry body is empty", app.status_msg),
    Err(e) => {
      // Hand the unsaved text back so it is not lost.
      eprintln!("{}", ui::unsaved_draft(&app.draft));
      Err(e).context("saving entry")
    }
  }
}

/// Refresh the snapshot. A failed load is an error, never an empty list.
async fn load(app: &mut App<SqliteStore>) -> Result<()> {
  app.refresh().await.context("could not load entries")
}
