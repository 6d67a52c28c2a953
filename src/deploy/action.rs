//! Lifecycle actions and their options

use core::fmt;
use core::str::FromStr;

use crate::error::DeployError;

/// Default number of log lines shown per service
pub const DEFAULT_TAIL: u32 = 100;

/// A lifecycle action requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    /// Build images for every service
    Init,
    /// Start every service detached
    Start,
    /// Delete, init and start in sequence
    Restart,
    /// Stop containers without removing them
    Stop,
    /// Remove containers, networks and images
    Delete,
    /// List containers
    Status,
    /// Show service logs
    Logs,
}

impl Action {
    pub const ALL: [Self; 7] = [
        Self::Init,
        Self::Start,
        Self::Restart,
        Self::Stop,
        Self::Delete,
        Self::Status,
        Self::Logs,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Start => "start",
            Self::Restart => "restart",
            Self::Stop => "stop",
            Self::Delete => "delete",
            Self::Status => "status",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for Action {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = DeployError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| DeployError::unknown_action(s))
    }
}

/// Options for the `logs` action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Keep streaming new output
    pub follow: bool,
    /// Lines to show from the end of each service's log
    pub tail: u32,
    /// Restrict output to one service
    pub service: Option<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            follow: false,
            tail: DEFAULT_TAIL,
            service: None,
        }
    }
}

impl LogOptions {
    /// Arguments following the `logs` subcommand
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.follow {
            args.push("-f".to_owned());
        }
        args.push("--tail".to_owned());
        args.push(self.tail.to_string());
        if let Some(service) = self.service.as_ref() {
            args.push(service.clone());
        }
        args
    }
}
