//! Write an example fixture

use std::fs;
use std::path::Path;

use attrcheck::output::OutputMode;

const EXAMPLE_FIXTURE: &str = r#"# attrcheck fixture
#
# Each [[expect]] entry is the complete attribute set of one data point.
# A matcher without `value` accepts any value, but the attribute must exist.

metric = "jvm.memory.used"

# bijective (default): one data point per attribute set and vice versa
# covering: each point matches exactly one set, each set at least one point
mode = "bijective"

[[expect]]
attributes = [ { name = "type", value = "heap" }, { name = "pool" } ]

[[expect]]
attributes = [ { name = "type", value = "non_heap" }, { name = "pool" } ]

[[point]]
attributes = { type = "heap", pool = "G1 Eden Space" }

[[point]]
attributes = { type = "non_heap", pool = "Metaspace" }
"#;

/// Write an example fixture to `path`
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, EXAMPLE_FIXTURE)?;

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": true,
                "path": path.display().to_string()
            })
        );
    } else {
        println!("Created {}", path.display());
        println!("Run 'attrcheck verify {}' to check it", path.display());
    }
    Ok(())
}
