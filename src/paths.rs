//! Centralized path definitions for attrcheck
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.attrcheck/
//! └── config.toml               # User preferences (output, default mode)
//! ```
//!
//! Fixtures live wherever the user keeps them; only files ending in
//! [`FIXTURE_EXTENSION`] are picked up when a directory is scanned.

use std::path::{Path, PathBuf};

/// Global config directory name
const GLOBAL_DIR: &str = ".attrcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Extension of fixture files
pub const FIXTURE_EXTENSION: &str = "toml";

/// Get the global attrcheck directory.
///
/// Returns `~/.attrcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.attrcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Whether a path looks like a fixture file
#[must_use]
pub fn is_fixture_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION)
}
