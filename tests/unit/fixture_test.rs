//! Tests for fixture loading

use std::fs;

use attrcheck::core::services::{FailureKind, MatchMode};
use attrcheck::fixture::{FixtureError, discover_fixtures, load_fixture};
use tempfile::TempDir;

const MEMORY: &str = r#"
metric = "jvm.memory.used"

[[expect]]
attributes = [ { name = "type", value = "heap" }, { name = "pool" } ]

[[expect]]
attributes = [ { name = "type", value = "non_heap" }, { name = "pool" } ]

[[point]]
attributes = { type = "heap", pool = "G1 Eden Space" }

[[point]]
attributes = { type = "non_heap", pool = "Metaspace" }
"#;

#[test]
fn load_and_verify() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("memory.toml");
    fs::write(&path, MEMORY).unwrap();

    let fixture = load_fixture(&path).unwrap();
    assert_eq!(fixture.path, path);
    assert_eq!(fixture.sets.len(), 2);
    assert_eq!(fixture.points.len(), 2);
    assert!(fixture.verify(MatchMode::Bijective).is_ok());
    assert!(fixture.verify(MatchMode::Covering).is_ok());
}

#[test]
fn failing_fixture_reports_kind() {
    let content = MEMORY.replace("pool = \"Metaspace\"", "pool = \"Metaspace\", extra = \"x\"");
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("memory.toml");
    fs::write(&path, content).unwrap();

    let err = load_fixture(&path).unwrap().verify(MatchMode::Bijective).unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::UnmatchedDataPoint));
    assert!(err.to_string().contains("{extra=x, pool=Metaspace, type=non_heap}"));
}

#[test]
fn missing_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let err = load_fixture(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, FixtureError::Read { .. }));
}

#[test]
fn metric_is_required() {
    let err = attrcheck::fixture::Fixture::parse(
        "[[point]]\nattributes = {}\n",
        std::path::Path::new("x.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, FixtureError::Parse { .. }));
}

#[test]
fn misspelled_sections_do_not_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("memory.toml");

    for typo in [
        MEMORY.replace("[[expect]]", "[[expects]]"),
        MEMORY.replace("[[point]]", "[[points]]"),
        MEMORY.replacen("attributes", "attribute", 1),
    ] {
        fs::write(&path, typo).unwrap();
        let err = load_fixture(&path).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }), "unexpected error: {err}");
        assert!(err.to_string().contains("memory.toml"));
    }
}

#[test]
fn discover_single_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("memory.toml");
    fs::write(&path, MEMORY).unwrap();
    assert_eq!(discover_fixtures(&path).unwrap(), vec![path]);
}
