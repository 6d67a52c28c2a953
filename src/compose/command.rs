//! Assembly and rendering of compose command lines

use core::fmt;
use core::str::FromStr;

use crate::deploy::DeploymentTarget;
use crate::error::DeployError;
use anyhow::Result;

/// How an assembled command is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Shell-escaped command ready to paste into a terminal
    #[default]
    Shell,
    /// JSON array of arguments
    Json,
}

impl FromStr for OutputFormat {
    type Err = DeployError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            _ => Err(DeployError::invalid_format(s)),
        }
    }
}

/// A fully assembled compose invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    program: String,
    args: Vec<String>,
}

impl ComposeCommand {
    /// Start a command for `target`: the base words of its invocation mode
    /// followed by the global project-directory and file flags when they
    /// differ from the defaults
    #[must_use]
    pub fn for_target(target: &DeploymentTarget) -> Self {
        let (program, base_args) = target.mode().base();

        let mut command = Self {
            program: program.to_owned(),
            args: base_args.iter().map(|&arg| arg.to_owned()).collect(),
        };

        if !target.has_default_project_dir() {
            command = command
                .arg("--project-directory")
                .arg(target.project_dir().to_string_lossy());
        }

        if !target.has_default_compose_file() {
            command = command
                .arg("-f")
                .arg(target.compose_path().to_string_lossy());
        }

        command
    }

    /// Append a single argument
    #[must_use]
    #[inline]
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    #[inline]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program name
    #[must_use]
    #[inline]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector, program first
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Render the command in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be serialized to JSON
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Shell => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string(&self.argv())
                .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}")),
        }
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escaped: Vec<String> = self.argv().iter().map(|arg| shell_escape(arg)).collect();
        f.write_str(&escaped.join(" "))
    }
}

/// Escape a string for shell execution
/// Uses double quotes for safety, escaping special characters inside
fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | ':' | '=')
        })
    {
        return s.to_owned();
    }

    let mut result = String::from('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            '$' => result.push_str(r"\$"),
            '`' => result.push_str(r"\`"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}
