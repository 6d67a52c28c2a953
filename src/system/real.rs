//! Real system implementation using `std::fs` and `std::process`

use super::{CapturedOutput, ProcessStatus, System};
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Production implementation of System trait
///
/// This implementation directly delegates to the standard library's
/// filesystem and process functions.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ExitStatus> for ProcessStatus {
    fn from(status: ExitStatus) -> Self {
        status
            .code()
            .map_or_else(Self::terminated, Self::exited)
    }
}

impl System for RealSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn run_captured(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CapturedOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessStatus> {
        // Inherited stdio so interactive output (logs -f) streams straight through
        let status = Command::new(program).args(args).status()?;
        Ok(status.into())
    }
}
