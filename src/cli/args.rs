use crate::compose::{DEFAULT_COMPOSE_FILE, DEFAULT_PROJECT_DIR};
use crate::deploy::{DEFAULT_TAIL, LogOptions};
use clap::Parser;

/// Command-line arguments for compose-deploy
#[derive(Parser, Debug, Clone)]
#[command(name = "compose-deploy")]
#[command(about = "A CLI tool for driving Docker Compose deployment lifecycles")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Action to perform: init, start, restart, stop, delete, status or logs
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Compose file name, resolved against the project directory
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_COMPOSE_FILE,
        env = "COMPOSE_DEPLOY_FILE"
    )]
    pub file: String,

    /// Project directory
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "PATH",
        default_value = DEFAULT_PROJECT_DIR,
        env = "COMPOSE_DEPLOY_DIRECTORY"
    )]
    pub directory: String,

    /// Only show logs for this service (logs)
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// Keep streaming log output (logs)
    #[arg(long)]
    pub follow: bool,

    /// Number of lines to show from the end of the logs (logs)
    #[arg(long, value_name = "LINES", default_value_t = DEFAULT_TAIL)]
    pub tail: u32,

    /// Print the compose commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run: shell or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "shell",
        requires = "dry_run"
    )]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options for the `logs` action
    #[must_use]
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            follow: self.follow,
            tail: self.tail,
            service: self.service.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["compose-deploy", "start"]).unwrap();

        assert_eq!(args.action, "start");
        assert_eq!(args.file, "docker-compose.yml");
        assert_eq!(args.directory, ".");
        assert_eq!(args.log_options(), LogOptions::default());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_log_flags() {
        let args = Args::try_parse_from([
            "compose-deploy",
            "logs",
            "--follow",
            "--tail",
            "50",
            "--service",
            "web",
        ])
        .unwrap();

        let options = args.log_options();
        assert!(options.follow);
        assert_eq!(options.tail, 50);
        assert_eq!(options.service.as_deref(), Some("web"));
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["compose-deploy", "stop", "-f", "stack.yml", "-d", "deploy"])
                .unwrap();

        assert_eq!(args.file, "stack.yml");
        assert_eq!(args.directory, "deploy");
    }

    #[test]
    fn test_output_format_requires_dry_run() {
        let result =
            Args::try_parse_from(["compose-deploy", "status", "--output-format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_tail_rejected() {
        let result = Args::try_parse_from(["compose-deploy", "logs", "--tail", "-5"]);
        assert!(result.is_err());
    }
}
