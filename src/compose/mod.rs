//! Compose tool module
//!
//! Handles detection of the compose entry point, command assembly and
//! reading the compose file

pub mod command;
pub mod detect;
pub mod file;

pub use command::*;
pub use detect::*;
pub use file::*;

/// Compose file name used when none is given
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// Project directory used when none is given
pub const DEFAULT_PROJECT_DIR: &str = ".";
