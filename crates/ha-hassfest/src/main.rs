//! hassfest command line
//!
//! Validates generated build files and, with `--action generate`, rewrites
//! them.

use anyhow::Result;
use clap::Parser;
use ha_hassfest::{plugins_by_name, run, Action, Config, Plugin, REQUIREMENTS_TEST};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Validate and generate Home Assistant build files
#[derive(Parser, Debug)]
#[command(name = "hassfest", version, about)]
struct Cli {
    /// Repository root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// validate or generate
    #[arg(long, default_value = "validate")]
    action: Action,

    /// Comma-separated plugins to run
    #[arg(short = 'p', long = "plugins", value_delimiter = ',', default_value = "docker")]
    plugins: Vec<String>,

    /// Requirements file holding the tooling pins, relative to the root
    #[arg(long, default_value = REQUIREMENTS_TEST)]
    requirements: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let plugins = plugins_by_name(&cli.plugins)?;
    let plugin_refs: Vec<&dyn Plugin> = plugins.iter().map(|p| p.as_ref()).collect();

    let mut config = Config::new(cli.root, cli.action).with_requirements_file(cli.requirements);
    run(&mut config, &plugin_refs)?;

    if !config.has_errors() {
        info!("hassfest {} finished without errors", config.action);
        return Ok(ExitCode::SUCCESS);
    }

    for err in config.errors() {
        let hint = if err.fixable { " (fixable)" } else { "" };
        error!("{}{}", err, hint);
    }
    if config.errors().iter().any(|e| e.fixable) {
        info!("Run hassfest with --action generate to fix the fixable errors");
    }
    Ok(ExitCode::FAILURE)
}
