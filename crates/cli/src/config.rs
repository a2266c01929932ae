// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flowmates configuration management.
//!
//! The flowmates config lives in `~/.flowmates/config.json` and records where
//! the local flowmates rules repository is checked out:
//!
//! ```json
//! { "repo_path": "/home/me/src/flowmates" }
//! ```
//!
//! Keys other than `repo_path` are preserved when the file is rewritten.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const FLOWMATES_DIR_NAME: &str = ".flowmates";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.json";

/// Configuration stored in `~/.flowmates/<file>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowmatesConfig {
    /// Absolute path to the flowmates repository.
    pub repo_path: PathBuf,
    /// Keys written by other tools.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FlowmatesConfig {
    pub fn new(repo_path: PathBuf) -> Self {
        FlowmatesConfig {
            repo_path,
            extra: serde_json::Map::new(),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Builds a config for `repo_path` on top of whatever object is already at
    /// `path`. A missing, unreadable, or non-object file contributes no keys.
    pub fn merged(path: &Path, repo_path: PathBuf) -> Self {
        let mut extra: serde_json::Map<String, serde_json::Value> =
            match fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    tracing::debug!(path = %path.display(), error = %e, "replacing unparsable config");
                    serde_json::Map::new()
                }),
                Err(_) => serde_json::Map::new(),
            };
        extra.remove("repo_path");
        FlowmatesConfig { repo_path, extra }
    }

    /// Serializes to pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }

    /// Writes the configuration, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// `~/.flowmates`
pub fn flowmates_dir(home: &Path) -> PathBuf {
    home.join(FLOWMATES_DIR_NAME)
}

/// `~/.flowmates/config.json`, the file `init` consults.
pub fn default_config_path(home: &Path) -> PathBuf {
    flowmates_dir(home).join(DEFAULT_CONFIG_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
