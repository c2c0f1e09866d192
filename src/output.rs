//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a verify run over one or more fixtures
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// Whether every fixture passed
    pub passed: bool,
    /// Per-fixture outcomes, in the order they were checked
    pub fixtures: Vec<FixtureOutcome>,
}

/// Outcome of checking one fixture
#[derive(Debug, Serialize)]
pub struct FixtureOutcome {
    /// Fixture file
    pub file: String,
    /// Metric name, if the fixture could be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Matching mode used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Whether the assertion held
    pub passed: bool,
    /// Failure category (e.g. "ambiguous", "invalid_fixture")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyReport {
    /// Build a report; it passes when every outcome passed
    #[must_use]
    pub fn new(fixtures: Vec<FixtureOutcome>) -> Self {
        Self {
            passed: fixtures.iter().all(|f| f.passed),
            fixtures,
        }
    }

    /// Number of failed fixtures
    #[must_use]
    pub fn failed(&self) -> usize {
        self.fixtures.iter().filter(|f| !f.passed).count()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.fixtures.is_empty() {
            println!("No fixtures found.");
            return;
        }

        println!("Verifying {} fixture(s)...\n", self.fixtures.len());

        for f in &self.fixtures {
            let status = if f.passed { "PASS".green().bold() } else { "FAIL".red().bold() };
            match (&f.metric, &f.mode) {
                (Some(metric), Some(mode)) => println!("  {status} {} [{metric}, {mode}]", f.file),
                _ => println!("  {status} {}", f.file),
            }
            if let Some(message) = &f.message {
                println!("         {message}\n");
            }
        }

        println!();
        if self.passed {
            println!("All fixtures passed.");
        } else {
            println!("FAILED: {} of {} fixture(s)", self.failed(), self.fixtures.len());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
