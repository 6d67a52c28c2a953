//! Mock system implementation for testing

use super::{CapturedOutput, ProcessStatus, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` keeps an in-memory filesystem, answers process launches from
/// scripted rules and records every launch so tests can assert on exactly
/// which commands ran and in what order. Unscripted commands exit with 0.
///
/// # Example
/// ```
/// use compose_deploy::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("./docker-compose.yml", "services: {}\n").unwrap()
///     .with_exit_code("docker-compose", "stop", 1).unwrap();
///
/// assert!(system.exists(Path::new("./docker-compose.yml")));
/// let status = system
///     .run_inherited("docker-compose", &["stop".to_owned()])
///     .unwrap();
/// assert!(!status.success());
/// assert_eq!(system.invocations().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    files: HashMap<PathBuf, String>,
    missing_programs: HashSet<String>,
    rules: Vec<MockRule>,
    invocations: Vec<Invocation>,
}

/// Scripted response for any launch of `program` whose arguments contain `arg`
struct MockRule {
    program: String,
    arg: String,
    status: ProcessStatus,
    stdout: String,
}

/// A process launch recorded by `MockSystem`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Whether the output was captured (detection) rather than inherited
    pub captured: bool,
}

impl Invocation {
    /// Full argument vector, program first
    #[must_use]
    #[inline]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Check whether the arguments contain `arg`
    #[must_use]
    #[inline]
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                files: HashMap::new(),
                missing_programs: HashSet::new(),
                rules: Vec::new(),
                invocations: Vec::new(),
            })),
        }
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the mock state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &str) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state
            .files
            .insert(path.as_ref().to_path_buf(), contents.to_owned());
        drop(state);
        Ok(self)
    }

    /// Make every launch of `program` fail with `NotFound` (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the mock state lock is poisoned
    #[inline]
    pub fn with_missing_program(self, program: &str) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.missing_programs.insert(program.to_owned());
        drop(state);
        Ok(self)
    }

    /// Script the exit code for launches of `program` with `arg` among its arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the mock state lock is poisoned
    #[inline]
    pub fn with_exit_code(self, program: &str, arg: &str, code: i32) -> io::Result<Self> {
        self.with_response(program, arg, code, "")
    }

    /// Make launches of `program` with `arg` among its arguments end without
    /// an exit code, as if killed by a signal
    ///
    /// # Errors
    ///
    /// Returns an error if the mock state lock is poisoned
    #[inline]
    pub fn with_terminated(self, program: &str, arg: &str) -> io::Result<Self> {
        self.push_rule(program, arg, ProcessStatus::terminated(), "")
    }

    /// Script the exit code and captured stdout for launches of `program`
    /// with `arg` among its arguments. The first matching rule wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the mock state lock is poisoned
    #[inline]
    pub fn with_response(
        self,
        program: &str,
        arg: &str,
        code: i32,
        stdout: &str,
    ) -> io::Result<Self> {
        self.push_rule(program, arg, ProcessStatus::exited(code), stdout)
    }

    fn push_rule(
        self,
        program: &str,
        arg: &str,
        status: ProcessStatus,
        stdout: &str,
    ) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.rules.push(MockRule {
            program: program.to_owned(),
            arg: arg.to_owned(),
            status,
            stdout: stdout.to_owned(),
        });
        drop(state);
        Ok(self)
    }

    /// All launches recorded so far, in order
    #[must_use]
    #[inline]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.state
            .read()
            .map(|state| state.invocations.clone())
            .unwrap_or_default()
    }

    /// Launches whose output was inherited, i.e. everything except detection
    #[must_use]
    #[inline]
    pub fn inherited_invocations(&self) -> Vec<Invocation> {
        self.invocations()
            .into_iter()
            .filter(|invocation| !invocation.captured)
            .collect()
    }

    fn launch(&self, program: &str, args: &[String], captured: bool) -> io::Result<(ProcessStatus, String)> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        state.invocations.push(Invocation {
            program: program.to_owned(),
            args: args.to_vec(),
            captured,
        });

        if state.missing_programs.contains(program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {program}"),
            ));
        }

        let response = state
            .rules
            .iter()
            .find(|rule| rule.program == program && args.iter().any(|a| *a == rule.arg))
            .map_or_else(
                || (ProcessStatus::exited(0), String::new()),
                |rule| (rule.status, rule.stdout.clone()),
            );
        drop(state);
        Ok(response)
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path))
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let contents = state.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        drop(state);
        Ok(contents)
    }

    #[inline]
    fn run_captured(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        let (status, stdout) = self.launch(program, args, true)?;
        Ok(CapturedOutput {
            status,
            stdout,
            stderr: String::new(),
        })
    }

    #[inline]
    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessStatus> {
        let (status, _stdout) = self.launch(program, args, false)?;
        Ok(status)
    }
}
