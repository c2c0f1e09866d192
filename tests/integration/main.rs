//! Integration tests for the attrcheck CLI
//!
//! These tests run the binary against fixture files written to a temporary
//! directory. `HOME` points into the same directory so the user's global
//! config never leaks into a test.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PASSING: &str = r#"
metric = "jvm.memory.used"

[[expect]]
attributes = [ { name = "type", value = "heap" }, { name = "pool" } ]

[[expect]]
attributes = [ { name = "type", value = "non_heap" }, { name = "pool" } ]

[[point]]
attributes = { type = "non_heap", pool = "Metaspace" }

[[point]]
attributes = { type = "heap", pool = "G1 Eden Space" }
"#;

const EXTRA_ATTRIBUTE: &str = r#"
metric = "jvm.memory.used"

[[expect]]
attributes = [ { name = "a", value = "1" }, { name = "b" } ]

[[point]]
attributes = { a = "1", b = "2", c = "3" }
"#;

const DUPLICATE_NAME: &str = r#"
metric = "jvm.memory.used"

[[expect]]
attributes = [ { name = "a", value = "1" }, { name = "a", value = "2" } ]
"#;

const POOLS: &str = r#"
metric = "jvm.memory.pool.used"

[[expect]]
attributes = [ { name = "pool" } ]

[[point]]
attributes = { pool = "eden" }

[[point]]
attributes = { pool = "old" }
"#;

/// Helper function to create an attrcheck command with an isolated HOME
fn attrcheck(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("attrcheck"));
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    attrcheck(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("attrcheck"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    attrcheck(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixtures declare the attribute sets"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    attrcheck(temp.path()).assert().success().stdout(predicate::str::contains("attrcheck v"));
}

#[test]
fn test_verify_passing_fixture() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "memory.toml", PASSING);

    attrcheck(temp.path())
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("All fixtures passed."));
}

#[test]
fn test_verify_extra_attribute_fails() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "extra.toml", EXTRA_ATTRIBUTE);

    attrcheck(temp.path())
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("unexpected data point attributes: {a=1, b=2, c=3}"))
        .stderr(predicate::str::contains("1 fixture(s) failed"));
}

#[test]
fn test_verify_duplicate_name_is_invalid_fixture() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "dup.toml", DUPLICATE_NAME);

    attrcheck(temp.path())
        .args(["--json", "verify"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"invalid_fixture\""))
        .stdout(predicate::str::contains("duplicate matcher with name: a"));
}

#[test]
fn test_verify_directory_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("fixtures");
    write(&dir, "a/memory.toml", PASSING);
    write(&dir, "b/extra.toml", EXTRA_ATTRIBUTE);
    write(&dir, "README.md", "not a fixture");

    let output = attrcheck(temp.path())
        .args(["--json", "verify"])
        .arg(&dir)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    let fixtures = report["fixtures"].as_array().unwrap();
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0]["passed"], true);
    assert_eq!(fixtures[1]["kind"], "unmatched_data_point");
}

#[test]
fn test_verify_mode_flag() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "pools.toml", POOLS);

    attrcheck(temp.path())
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("expected 1 data point(s) but found 2"));

    attrcheck(temp.path())
        .args(["verify", "--mode", "covering"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_verify_invalid_mode() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "pools.toml", POOLS);

    attrcheck(temp.path())
        .args(["verify", "--mode", "strict"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid match mode: strict"));
}

#[test]
fn test_verify_missing_path() {
    let temp = TempDir::new().unwrap();
    attrcheck(temp.path())
        .arg("verify")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("fixture path does not exist"))
        .stderr(predicate::str::contains("1 fixture(s) failed"));
}

#[test]
fn test_verify_missing_path_still_checks_others() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "memory.toml", PASSING);

    let output = attrcheck(temp.path())
        .args(["--json", "verify"])
        .arg(temp.path().join("missing"))
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fixtures = report["fixtures"].as_array().unwrap();
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0]["kind"], "invalid_fixture");
    assert_eq!(fixtures[1]["passed"], true);
    assert_eq!(fixtures[1]["metric"], "jvm.memory.used");
}

#[test]
fn test_verify_misspelled_section_fails() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "typo.toml", &PASSING.replace("[[point]]", "[[points]]"));

    attrcheck(temp.path())
        .args(["--json", "verify"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"invalid_fixture\""));
}

#[test]
fn test_json_flag_overrides_saved_default() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "memory.toml", PASSING);

    attrcheck(temp.path()).args(["config", "--json-output", "true"]).assert().success();

    attrcheck(temp.path())
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));

    attrcheck(temp.path())
        .args(["--json=false", "verify"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All fixtures passed."));
}

#[test]
fn test_config_sets_default_mode() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "pools.toml", POOLS);

    attrcheck(temp.path())
        .args(["config", "--mode", "covering"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode = \"covering\""));

    assert!(temp.path().join(".attrcheck/config.toml").exists());

    attrcheck(temp.path()).arg("verify").arg(&path).assert().success();
}

#[test]
fn test_init_writes_verifiable_fixture() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fixtures/example.toml");

    attrcheck(temp.path())
        .arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    attrcheck(temp.path()).arg("verify").arg(&path).assert().success();

    attrcheck(temp.path())
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
