//! Deployment module
//!
//! Coordinates lifecycle actions against the compose tool

pub mod action;
pub mod target;

pub use action::*;
pub use target::*;

use crate::compose::{ComposeCommand, ComposeFile, OutputFormat, detect_invocation_mode};
use crate::error::DeployError;
use crate::system::System;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Runs lifecycle actions for one deployment
///
/// A `Deployer` only exists once the compose entry point has been detected,
/// so every action runs with a resolved invocation mode. Actions report their
/// own failures and return `false`; nothing is propagated past them.
pub struct Deployer<'src> {
    target: DeploymentTarget,
    system: &'src dyn System,
    dry_run: bool,
    format: OutputFormat,
}

impl<'src> Deployer<'src> {
    /// Detect the compose entry point and create a deployer for
    /// `compose_file` inside `project_dir`
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::ComposeUnavailable`] if neither `docker-compose`
    /// nor `docker compose` answers a version query.
    pub fn new<D: Into<PathBuf>>(
        compose_file: &str,
        project_dir: D,
        system: &'src dyn System,
    ) -> Result<Self, DeployError> {
        let mode = detect_invocation_mode(system)?;
        Ok(Self::for_target(
            DeploymentTarget::new(compose_file, project_dir, mode),
            system,
        ))
    }

    /// Create a deployer for an already resolved target
    #[must_use]
    pub fn for_target(target: DeploymentTarget, system: &'src dyn System) -> Self {
        Self {
            target,
            system,
            dry_run: false,
            format: OutputFormat::Shell,
        }
    }

    /// Print commands in `format` instead of running them
    #[must_use]
    pub fn with_dry_run(mut self, format: OutputFormat) -> Self {
        self.dry_run = true;
        self.format = format;
        self
    }

    #[must_use]
    pub const fn target(&self) -> &DeploymentTarget {
        &self.target
    }

    /// Run `action`; `logs` only matters for [`Action::Logs`]
    pub fn perform(&self, action: Action, logs: &LogOptions) -> bool {
        match action {
            Action::Init => self.init(),
            Action::Start => self.start(),
            Action::Restart => self.restart(),
            Action::Stop => self.stop(),
            Action::Delete => self.delete(),
            Action::Status => self.status(),
            Action::Logs => self.logs(logs),
        }
    }

    /// Build images for every service
    pub fn init(&self) -> bool {
        info!("=> Initializing deployment");
        report(self.ensure_compose_file().and_then(|()| {
            self.log_service_count();
            info!("Building images...");
            self.execute(&self.command().arg("build"))
        }))
    }

    /// Start every service in the background
    pub fn start(&self) -> bool {
        info!("=> Starting services");
        report(self.ensure_compose_file().and_then(|()| {
            info!("Starting all services...");
            self.execute(&self.command().args(["up", "-d"]))
        }))
    }

    /// Tear everything down, rebuild and start again
    ///
    /// All three steps run even when an earlier one fails; the result is
    /// `true` only if every step succeeded.
    pub fn restart(&self) -> bool {
        info!("=> Restarting services");
        if !report(self.ensure_compose_file()) {
            return false;
        }

        info!("Restarting all services...");
        let steps: [fn(&Self) -> bool; 3] = [Self::delete, Self::init, Self::start];
        let results: Vec<bool> = steps.iter().map(|step| step(self)).collect();
        debug!("Restart step results: {:?}", results);

        results.into_iter().all(|succeeded| succeeded)
    }

    /// Stop containers, keeping them for a later start
    pub fn stop(&self) -> bool {
        info!("=> Stopping services");
        report(self.ensure_compose_file().and_then(|()| {
            info!("Stopping all services...");
            self.execute(&self.command().arg("stop"))
        }))
    }

    /// Remove containers, networks and every image used by the services
    pub fn delete(&self) -> bool {
        info!("=> Deleting services");
        report(self.ensure_compose_file().and_then(|()| {
            info!("Stopping and removing all services...");
            self.execute(&self.command().args(["down", "--rmi", "all"]))
        }))
    }

    /// List service containers
    pub fn status(&self) -> bool {
        info!("=> Service status");
        report(self.ensure_compose_file().and_then(|()| {
            info!("Checking service status...");
            self.execute(&self.command().arg("ps"))
        }))
    }

    /// Show service logs
    ///
    /// Unlike the other actions this does not require the compose file to
    /// exist; the compose tool reports that itself.
    pub fn logs(&self, options: &LogOptions) -> bool {
        info!("=> Service logs");
        if let Some(service) = options.service.as_deref() {
            self.warn_if_undeclared(service);
        }

        report(self.execute(&self.command().arg("logs").args(options.to_args())))
    }

    fn command(&self) -> ComposeCommand {
        ComposeCommand::for_target(&self.target)
    }

    fn ensure_compose_file(&self) -> Result<(), DeployError> {
        let path = self.target.compose_path();
        if self.system.exists(path) {
            Ok(())
        } else {
            Err(DeployError::missing_configuration(
                path.display().to_string(),
            ))
        }
    }

    fn execute(&self, command: &ComposeCommand) -> Result<(), DeployError> {
        // Echoed on stdout, not logged, so log filtering never hides it
        if self.dry_run {
            let rendered = command.render(self.format).map_err(|err| {
                DeployError::command_failed(command.to_string(), format!("{err:#}"))
            })?;
            println!("{rendered}");
            return Ok(());
        }

        println!("Executing: {command}");

        let status = self
            .system
            .run_inherited(command.program(), command.arguments())
            .map_err(|err| DeployError::command_failed(command.to_string(), err.to_string()))?;

        if status.success() {
            return Ok(());
        }

        let message = status.code().map_or_else(
            || "terminated by signal".to_owned(),
            |code| format!("exit status {code}"),
        );
        Err(DeployError::command_failed(command.to_string(), message))
    }

    fn log_service_count(&self) {
        match ComposeFile::load(self.system, self.target.compose_path()) {
            Ok(compose) => debug!("Compose file declares {} services", compose.service_count()),
            Err(err) => debug!("Skipping service inspection: {err:#}"),
        }
    }

    fn warn_if_undeclared(&self, service: &str) {
        let path = self.target.compose_path();
        if !self.system.exists(path) {
            return;
        }

        match ComposeFile::load(self.system, path) {
            Ok(compose) if !compose.has_service(service) => {
                let declared: Vec<&str> = compose.service_names().collect();
                warn!(
                    "Service '{}' is not declared in {} (declared: {})",
                    service,
                    path.display(),
                    declared.join(", ")
                );
            }
            Ok(_) => {}
            Err(err) => debug!("Skipping service inspection: {err:#}"),
        }
    }
}

/// Log a failed step and fold it into a boolean outcome
fn report(result: Result<(), DeployError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            error!("{err}");
            false
        }
    }
}
