//! Layered configuration: built-in defaults, then an optional TOML file,
//! then `DIARY_*` environment variables, then the `--store` flag.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use diary_store_sqlite::DEFAULT_FILE_NAME;
use serde::Deserialize;

/// Default location of the diary database.
pub fn default_store_path() -> String {
  format!("~/.local/share/diary/{DEFAULT_FILE_NAME}")
}

/// Runtime configuration, deserialised from `diary.toml` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  /// Path to the SQLite database file. A leading `~/` is expanded; a
  /// directory gets [`DEFAULT_FILE_NAME`] appended.
  pub store_path: PathBuf,
}

impl CliConfig {
  /// Load configuration from `file` (if it exists) and the process
  /// environment. `store` wins over both.
  pub fn load(file: &Path, store: Option<&Path>) -> anyhow::Result<Self> {
    Self::resolve(file, store, config::Environment::with_prefix("DIARY"))
  }

  /// Same as [`CliConfig::load`] with an explicit environment source.
  pub fn resolve(
    file: &Path,
    store: Option<&Path>,
    env: config::Environment,
  ) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", default_store_path())
      .context("setting configuration defaults")?
      .add_source(config::File::from(file.to_path_buf()).required(false))
      .add_source(env)
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut cfg: CliConfig = settings
      .try_deserialize()
      .context("failed to deserialise configuration")?;

    if let Some(store) = store {
      cfg.store_path = store.to_path_buf();
    }
    cfg.store_path = expand_tilde(&cfg.store_path);
    if cfg.store_path.is_dir() {
      cfg.store_path.push(DEFAULT_FILE_NAME);
    }
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
