//! Show or change global defaults

use attrcheck::config::GlobalConfig;
use attrcheck::core::services::MatchMode;
use attrcheck::output::OutputMode;
use attrcheck::paths;

/// Apply any requested changes to the global config, then print it
pub fn config(
    mut config: GlobalConfig,
    mode: Option<MatchMode>,
    json_output: Option<bool>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let changed = mode.is_some() || json_output.is_some();
    if let Some(mode) = mode {
        config.verify.mode = mode;
    }
    if let Some(json) = json_output {
        config.output.json = json;
    }
    if changed {
        config.save()?;
        log::info!("Saved {}", paths::global_config().display());
    }

    match output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputMode::Human => print!("{}", toml::to_string_pretty(&config)?),
    }
    Ok(())
}
