//! System abstraction for filesystem and process operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing the deployer to be tested against a recording mock instead of a
//! real Docker installation.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Exit status of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
}

impl ProcessStatus {
    /// Status for a process that exited with `code`
    #[must_use]
    #[inline]
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status for a process terminated without an exit code (e.g. by a signal)
    #[must_use]
    #[inline]
    pub const fn terminated() -> Self {
        Self { code: None }
    }

    /// Exit code, if the process exited normally
    #[must_use]
    #[inline]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    #[must_use]
    #[inline]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Output of a child process whose streams were captured
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ProcessStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Unified trait for system operations (filesystem + processes)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `std::process`
/// - `MockSystem`: Test implementation with an in-memory filesystem that
///   records every process it is asked to launch
pub trait System: Send + Sync {
    // ==================== Filesystem Operations ====================

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    // ==================== Process Operations ====================

    /// Run a program to completion with stdout and stderr captured
    ///
    /// Returns an error only when the program could not be launched.
    fn run_captured(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput>;

    /// Run a program to completion with the parent's stdio inherited
    ///
    /// Returns an error only when the program could not be launched.
    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessStatus>;
}
