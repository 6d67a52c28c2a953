//! # `compose-deploy`
//!
//! `compose-deploy` drives the lifecycle of a Docker Compose deployment from a
//! single command. It works with both the standalone `docker-compose` binary
//! and the `docker compose` plugin, whichever the host provides.
//!
//! ## Actions
//! - `init`: build images for every service
//! - `start`: start every service detached
//! - `restart`: delete, init and start in sequence
//! - `stop`: stop containers without removing them
//! - `delete`: remove containers, networks and images
//! - `status`: list containers
//! - `logs`: show logs, optionally following one service
//!
//! ## Usage
//!
//! ```sh
//! compose-deploy restart -d ./deploy -f stack.yml
//! compose-deploy logs --service web --follow --tail 50
//! compose-deploy start --dry-run --output-format json
//! ```
//!
//! See `compose-deploy --help` for more options and details.
//!
//! ---
//! © 2024 `compose-deploy` Authors. MIT or Apache-2.0 licensed. See README and LICENSE files for more info.

use anyhow::Result;
use clap::Parser as _;
use compose_deploy::cli::Args;
use compose_deploy::system::real::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Dry runs print commands on stdout, so keep the log quiet
    let log_level = if args.dry_run {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let system = RealSystem::new();
    match compose_deploy::run(&args, &system) {
        Ok(true) => {
            println!("Action '{}' completed successfully", args.action);
            std::process::exit(0);
        }
        Ok(false) => {
            println!("Action '{}' failed", args.action);
            std::process::exit(1);
        }
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
}
