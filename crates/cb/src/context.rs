//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what every command handler needs: the
//! resolved data directory, global flags, and helpers to open the store and
//! the config file.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use corkboard_config::config::{CorkboardConfig, load_config, save_config};
use corkboard_config::corkboard_dir::{DB_FILE_NAME, find_corkboard_dir};
use corkboard_core::ids::BoardId;
use corkboard_core::store::BoardStore;
use corkboard_storage::sqlite::SqliteStore;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit data directory from `--dir`, if any.
    pub dir: Option<PathBuf>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            dir: global.dir.clone(),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Returns the resolved data directory, auto-discovering if needed.
    ///
    /// Priority: `--dir` flag > `CORKBOARD_DIR` env > walk-up discovery of
    /// `.corkboard/` from the current directory.
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.dir {
            return Some(dir.clone());
        }
        let cwd = env::current_dir().ok()?;
        find_corkboard_dir(&cwd)
    }

    /// Like [`resolve_dir`](Self::resolve_dir), but an error when nothing is
    /// found.
    pub fn require_dir(&self) -> Result<PathBuf> {
        self.resolve_dir()
            .context("no corkboard workspace found. Run 'cb init' to create one.")
    }

    /// Opens the board store over the workspace database.
    pub fn open_store(&self) -> Result<BoardStore<SqliteStore>> {
        let dir = self.require_dir()?;
        let db_path = dir.join(DB_FILE_NAME);
        tracing::debug!("opening database at {}", db_path.display());
        let storage = SqliteStore::open(&db_path)
            .with_context(|| format!("failed to open database: {}", db_path.display()))?;
        Ok(BoardStore::open(storage))
    }

    /// Loads the workspace config (defaults when the file does not exist).
    pub fn load_config(&self) -> Result<CorkboardConfig> {
        let dir = self.require_dir()?;
        load_config(&dir).context("failed to load config")
    }

    /// Saves the workspace config.
    pub fn save_config(&self, config: &CorkboardConfig) -> Result<()> {
        let dir = self.require_dir()?;
        save_config(&dir, config).context("failed to save config")
    }

    /// Resolves the board a command targets: explicit flag first, then the
    /// active board recorded by `cb board use`.
    pub fn resolve_board(&self, flag: Option<BoardId>) -> Result<BoardId> {
        if let Some(id) = flag {
            return Ok(id);
        }
        if let Some(id) = self.load_config()?.active_board {
            return Ok(id);
        }
        bail!("no board selected. Pass --board <id> or run 'cb board use <id>' first.");
    }
}
