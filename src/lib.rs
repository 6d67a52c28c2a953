//! `compose-deploy` - A CLI tool for driving Docker Compose deployment lifecycles
//!
//! This library detects whether Docker Compose is reachable as the standalone
//! `docker-compose` executable or as the `docker compose` plugin, and runs
//! init/start/restart/stop/delete/status/logs actions against a compose file.

pub mod cli;
pub mod compose;
pub mod deploy;
pub mod error;
pub mod system;

use anyhow::Result;
use cli::Args;
use compose::OutputFormat;
use deploy::{Action, Deployer};
use system::System;

/// Main entry point for the compose-deploy library
///
/// Returns whether the requested action succeeded. Errors are reserved for
/// problems that stop any action from running: an unknown action, an invalid
/// output format or no reachable compose tool.
pub fn run(args: &Args, system: &dyn System) -> Result<bool> {
    let action = args.action.parse::<Action>()?;
    let format = args.output_format.parse::<OutputFormat>()?;

    let deployer = Deployer::new(&args.file, args.directory.as_str(), system)?;
    let deployer = if args.dry_run {
        deployer.with_dry_run(format)
    } else {
        deployer
    };

    Ok(deployer.perform(action, &args.log_options()))
}
