//! Command-line entry point

mod args;

pub use args::Cli;

use std::env;
use std::process::ExitCode;

use log::{error, warn};

use crate::error::Result;
use crate::models::Config;
use crate::runner::{self, PyFtSubset, RunOutcome};

/// Resolve the project root and build the run configuration
pub fn build_config(cli: &Cli) -> Result<Config> {
    let project_root = match &cli.project_root {
        Some(root) => root.clone(),
        None => env::current_dir()?,
    };
    Config::load(&project_root, cli.config.as_deref(), cli.overrides())
}

/// Build the configuration and run the pipeline with `pyftsubset`
pub fn run_pipeline(cli: &Cli) -> Result<RunOutcome> {
    let config = build_config(cli)?;
    let subsetter = PyFtSubset::from_config(&config);
    runner::run(&config, &subsetter)
}

/// Run the pipeline and map the outcome to a process exit code
pub fn execute(cli: &Cli) -> ExitCode {
    match run_pipeline(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if cli.allow_failure => {
            warn!("Font build failed ({}), skipping...", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
