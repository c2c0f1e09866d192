//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use attrcheck::config::GlobalConfig;
use attrcheck::core::services::MatchMode;
use attrcheck::output::OutputMode;

/// attrcheck - Verify metric data point attributes
#[derive(Parser, Debug)]
#[command(
    name = "attrcheck",
    version,
    about = "Verify metric data point attributes",
    long_about = "Check observed metric data points against expected attribute sets.\n\n\
                  Fixtures declare the attribute sets each metric must carry.\n\
                  Every data point must match a set, and every set a data point."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable); `--json=false` overrides a saved default
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub json: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an example fixture to start from
    Init {
        /// Where to write the fixture
        #[arg(default_value = "attrcheck.example.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Verify fixture files (or directories of fixtures)
    Verify {
        /// Fixture files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Matching mode: bijective, covering (a fixture's own mode wins)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Show or change global defaults
    Config {
        /// Default matching mode: bijective, covering
        #[arg(long)]
        mode: Option<String>,

        /// Default to JSON output
        #[arg(long)]
        json_output: Option<bool>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();

    let output_mode = if cli.json.unwrap_or(config.output.json) {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { path, force }) => commands::init(&path, force, output_mode),
        Some(Command::Verify { paths, mode }) => {
            let mode = parse_mode(mode.as_deref())?.unwrap_or(config.verify.mode);
            commands::verify(&paths, mode, output_mode)
        },
        Some(Command::Config { mode, json_output }) => {
            commands::config(config, parse_mode(mode.as_deref())?, json_output, output_mode)
        },
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("attrcheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'attrcheck --help' for usage");
                println!("Run 'attrcheck init' to write an example fixture");
            }
            Ok(())
        },
    }
}

fn parse_mode(mode: Option<&str>) -> anyhow::Result<Option<MatchMode>> {
    mode.map(str::parse::<MatchMode>).transpose().map_err(anyhow::Error::msg)
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("attrcheck v{}", env!("CARGO_PKG_VERSION"));
    }
}
