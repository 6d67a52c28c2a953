//! The deployment a single invocation operates on

use crate::compose::{DEFAULT_COMPOSE_FILE, DEFAULT_PROJECT_DIR, InvocationMode};
use std::path::{Path, PathBuf};

/// Compose file, project directory and resolved invocation mode
///
/// Built once the invocation mode is known and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    compose_file: String,
    project_dir: PathBuf,
    compose_path: PathBuf,
    mode: InvocationMode,
}

impl DeploymentTarget {
    #[must_use]
    pub fn new<F, D>(compose_file: F, project_dir: D, mode: InvocationMode) -> Self
    where
        F: Into<String>,
        D: Into<PathBuf>,
    {
        let compose_file = compose_file.into();
        let project_dir = project_dir.into();
        let compose_path = project_dir.join(&compose_file);

        Self {
            compose_file,
            project_dir,
            compose_path,
            mode,
        }
    }

    /// Compose file name as given on the command line
    #[must_use]
    #[inline]
    pub fn compose_file(&self) -> &str {
        &self.compose_file
    }

    #[must_use]
    #[inline]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The compose file resolved against the project directory
    #[must_use]
    #[inline]
    pub fn compose_path(&self) -> &Path {
        &self.compose_path
    }

    #[must_use]
    #[inline]
    pub const fn mode(&self) -> InvocationMode {
        self.mode
    }

    #[must_use]
    pub fn has_default_project_dir(&self) -> bool {
        self.project_dir == Path::new(DEFAULT_PROJECT_DIR)
    }

    #[must_use]
    pub fn has_default_compose_file(&self) -> bool {
        self.compose_file == DEFAULT_COMPOSE_FILE
    }
}
