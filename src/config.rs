//! Global configuration management
//!
//! Provides persistent user preferences for the CLI.
//! Config is stored at `~/.attrcheck/config.toml`.
//!
//! ```toml
//! [output]
//! json = false
//!
//! [verify]
//! mode = "covering"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::services::MatchMode;
use crate::paths;

/// Global attrcheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Verification defaults
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Render results as JSON unless told otherwise
    #[serde(default)]
    pub json: bool,
}

/// Verification defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Matching mode used when neither the CLI nor the fixture sets one
    #[serde(default)]
    pub mode: MatchMode,
}

impl GlobalConfig {
    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from a specific file, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::global_config())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
