//! Discovery and creation of the `.corkboard/` directory.
//!
//! The data directory is found by walking up the tree from the working
//! directory, so any subdirectory of a workspace can run `cb` commands. The
//! `CORKBOARD_DIR` environment variable overrides discovery entirely.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// The name of the corkboard data directory.
const CORKBOARD_DIR_NAME: &str = ".corkboard";

/// Environment variable that overrides directory discovery.
const CORKBOARD_DIR_ENV: &str = "CORKBOARD_DIR";

/// Name of the SQLite database file inside `.corkboard/`.
pub const DB_FILE_NAME: &str = "corkboard.db";

/// Walk up the directory tree from `start` looking for a `.corkboard/`
/// directory.
///
/// The `CORKBOARD_DIR` environment variable is checked first. Returns `None`
/// if the filesystem root is reached without finding one.
pub fn find_corkboard_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CORKBOARD_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = match start.canonicalize() {
        Ok(p) => p,
        Err(_) => return None,
    };

    let mut current = start.as_path();
    loop {
        let candidate = current.join(CORKBOARD_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}

/// Like [`find_corkboard_dir`], but converts `None` into
/// [`ConfigError::DirNotFound`].
pub fn find_corkboard_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_corkboard_dir(start).ok_or(ConfigError::DirNotFound)
}

/// Ensure a `.corkboard/` directory exists at the given path.
///
/// If `path` is not itself named `.corkboard`, a `.corkboard/` subdirectory
/// is created under it. Returns the path to the directory.
pub fn ensure_corkboard_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let dir = if path.ends_with(CORKBOARD_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(CORKBOARD_DIR_NAME)
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
