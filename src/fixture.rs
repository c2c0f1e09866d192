//! Fixture files
//!
//! A fixture describes one metric assertion: the expected attribute sets
//! and the data points that were observed.
//!
//! ```toml
//! metric = "jvm.memory.used"
//! mode = "bijective"            # optional
//!
//! [[expect]]
//! attributes = [ { name = "type", value = "heap" }, { name = "pool" } ]
//!
//! [[point]]
//! attributes = { type = "heap", pool = "G1 Eden Space" }
//! ```
//!
//! A matcher entry without `value` accepts any value. Unknown keys are
//! rejected, and every `[[expect]]` and `[[point]]` entry needs an
//! `attributes` key (`attributes = []` / `attributes = {}` when empty).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::{
    AttributeMatcher, AttributeSet, DataPoint, SetError, attribute, attribute_set,
    attribute_with_any_value,
};
use crate::core::services::{AssertionError, MatchMode, MetricAssert};
use crate::paths;

/// Errors that can occur while loading fixtures
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture path does not exist
    #[error("fixture path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Fixture file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Fixture file is not valid TOML or has the wrong shape
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An expected attribute set is invalid
    #[error("invalid attribute set #{index} in {}: {source}", .path.display())]
    InvalidSet {
        /// File containing the set
        path: PathBuf,
        /// Position of the set among `[[expect]]` entries (1-based)
        index: usize,
        /// Why the set was rejected
        source: SetError,
    },

    /// Error walking a fixture directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Raw fixture file structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    metric: String,

    #[serde(default)]
    mode: Option<MatchMode>,

    #[serde(default)]
    expect: Vec<ExpectEntry>,

    #[serde(default, rename = "point")]
    points: Vec<DataPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExpectEntry {
    attributes: Vec<MatcherEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatcherEntry {
    name: String,
    value: Option<String>,
}

impl From<MatcherEntry> for AttributeMatcher {
    fn from(entry: MatcherEntry) -> Self {
        match entry.value {
            Some(value) => attribute(entry.name, value),
            None => attribute_with_any_value(entry.name),
        }
    }
}

/// A loaded and validated fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// File the fixture was loaded from
    pub path: PathBuf,
    /// Metric the data points belong to
    pub metric: String,
    /// Matching mode pinned by the fixture, if any
    pub mode: Option<MatchMode>,
    /// Expected attribute sets
    pub sets: Vec<AttributeSet>,
    /// Observed data points
    pub points: Vec<DataPoint>,
}

impl Fixture {
    /// Parse fixture content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, FixtureError> {
        let file: FixtureFile = toml::from_str(content).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let sets = file
            .expect
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                attribute_set(entry.attributes.into_iter().map(AttributeMatcher::from)).map_err(
                    |source| FixtureError::InvalidSet {
                        path: path.to_path_buf(),
                        index: i + 1,
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            metric: file.metric,
            mode: file.mode,
            sets,
            points: file.points,
        })
    }

    /// Mode to verify with: the fixture's own, else `default`
    #[must_use]
    pub fn effective_mode(&self, default: MatchMode) -> MatchMode {
        self.mode.unwrap_or(default)
    }

    /// Run the fixture's assertion
    pub fn verify(&self, default: MatchMode) -> Result<(), AssertionError> {
        MetricAssert::new(self.metric.as_str(), &self.points)
            .has_data_points_matching(self.effective_mode(default), &self.sets)?;
        Ok(())
    }
}

/// Load a fixture file
pub fn load_fixture(path: &Path) -> Result<Fixture, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Fixture::parse(&content, path)
}

/// Collect fixture files under `path`
///
/// A file is returned as-is. A directory is walked recursively for
/// fixture files, skipping hidden entries, in file-name order.
pub fn discover_fixtures(path: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    if !path.exists() {
        return Err(FixtureError::NotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && paths::is_fixture_file(entry.path()) {
            found.push(entry.into_path());
        }
    }
    log::debug!("found {} fixture(s) under {}", found.len(), path.display());
    Ok(found)
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
