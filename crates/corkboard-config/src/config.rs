//! The corkboard config file.
//!
//! Holds presentation-layer state only. The document never records which
//! board is open; that selection belongs to the UI layer and lives here, in
//! `.corkboard/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use corkboard_core::ids::BoardId;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The `.corkboard/` directory was not found.
    #[error("no .corkboard directory found (run 'cb init' first)")]
    DirNotFound,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Name of the config file inside `.corkboard/`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Per-workspace settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorkboardConfig {
    /// Board targeted by commands when `--board` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_board: Option<BoardId>,
}

/// Loads the config from `dir`, defaulting when no file exists yet.
pub fn load_config(dir: &Path) -> Result<CorkboardConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(CorkboardConfig::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Saves the config into `dir`.
pub fn save_config(dir: &Path, config: &CorkboardConfig) -> Result<()> {
    let raw = serde_yaml::to_string(config)?;
    std::fs::write(dir.join(CONFIG_FILE_NAME), raw)?;
    Ok(())
}
