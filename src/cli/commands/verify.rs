//! Verify fixture files

use std::path::{Path, PathBuf};

use attrcheck::core::services::MatchMode;
use attrcheck::fixture::{FixtureError, discover_fixtures, load_fixture};
use attrcheck::output::{FixtureOutcome, OutputMode, VerifyReport};

/// Verify every fixture found under `paths`
pub fn verify(paths: &[PathBuf], mode: MatchMode, output: OutputMode) -> anyhow::Result<()> {
    let mut outcomes = Vec::new();
    for path in paths {
        match discover_fixtures(path) {
            Ok(files) => outcomes.extend(files.iter().map(|file| check_fixture(file, mode))),
            Err(err) => outcomes.push(invalid_fixture(path, &err)),
        }
    }

    let report = VerifyReport::new(outcomes);
    report.render(output);

    if report.fixtures.is_empty() {
        anyhow::bail!("No fixtures found");
    }
    if !report.passed {
        anyhow::bail!("{} fixture(s) failed", report.failed());
    }
    Ok(())
}

fn check_fixture(file: &Path, default: MatchMode) -> FixtureOutcome {
    let display = file.display().to_string();

    let fixture = match load_fixture(file) {
        Ok(fixture) => fixture,
        Err(err) => return invalid_fixture(file, &err),
    };

    let mode = fixture.effective_mode(default);
    let result = fixture.verify(default);
    match &result {
        Ok(()) => log::debug!("{display}: '{}' passed ({mode})", fixture.metric),
        Err(err) => log::debug!("{display}: {err}"),
    }

    FixtureOutcome {
        file: display,
        metric: Some(fixture.metric),
        mode: Some(mode.to_string()),
        passed: result.is_ok(),
        kind: result.as_ref().err().and_then(|e| e.kind()).map(|k| k.to_string()),
        message: result.err().map(|e| e.to_string()),
    }
}

/// Outcome for a path that could not be turned into a fixture
fn invalid_fixture(path: &Path, err: &FixtureError) -> FixtureOutcome {
    log::warn!("{err}");
    FixtureOutcome {
        file: path.display().to_string(),
        metric: None,
        mode: None,
        passed: false,
        kind: Some("invalid_fixture".to_string()),
        message: Some(err.to_string()),
    }
}
