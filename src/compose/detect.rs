//! Detection of the compose entry point available on the host

use crate::error::DeployError;
use crate::system::System;
use core::fmt;
use tracing::{debug, info};

/// Which entry point reaches the compose tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvocationMode {
    /// The standalone `docker-compose` executable
    Standalone,
    /// The `docker compose` CLI plugin
    Plugin,
}

const STANDALONE_ARGS: &[&str] = &[];
const PLUGIN_ARGS: &[&str] = &["compose"];

impl InvocationMode {
    /// Program and leading arguments of every command in this mode
    #[must_use]
    #[inline]
    pub const fn base(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Standalone => ("docker-compose", STANDALONE_ARGS),
            Self::Plugin => ("docker", PLUGIN_ARGS),
        }
    }
}

impl fmt::Display for InvocationMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (program, args) = self.base();
        f.write_str(program)?;
        for arg in args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Find out which compose entry point answers a version query
///
/// The standalone executable is tried first; the plugin is only queried when
/// the standalone query fails or cannot be launched.
///
/// # Errors
///
/// Returns [`DeployError::ComposeUnavailable`] if neither entry point answers.
pub fn detect_invocation_mode(system: &dyn System) -> Result<InvocationMode, DeployError> {
    match system.run_captured("docker-compose", &["--version".to_owned()]) {
        Ok(output) if output.status.success() => {
            info!("Detected: {}", output.stdout.trim());
            return Ok(InvocationMode::Standalone);
        }
        Ok(output) => debug!(
            "docker-compose --version exited with {:?}",
            output.status.code()
        ),
        Err(err) => debug!("docker-compose could not be launched: {err}"),
    }

    match system.run_captured("docker", &["compose".to_owned(), "version".to_owned()]) {
        Ok(output) if output.status.success() => {
            info!("Detected: Docker Compose plugin");
            Ok(InvocationMode::Plugin)
        }
        Ok(output) => {
            debug!(
                "docker compose version exited with {:?}",
                output.status.code()
            );
            Err(DeployError::ComposeUnavailable)
        }
        Err(err) => {
            debug!("docker could not be launched: {err}");
            Err(DeployError::ComposeUnavailable)
        }
    }
}
