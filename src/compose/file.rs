//! Compose file loading and parsing

use crate::system::System;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The parts of a compose file this tool looks at
///
/// Only service names are read; everything else in the file is ignored and
/// belongs to the compose tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeFile {
    #[serde(default)]
    services: BTreeMap<String, serde_yaml::Value>,
}

impl ComposeFile {
    /// Load and parse a compose file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid YAML
    pub fn load(system: &dyn System, path: &Path) -> Result<Self> {
        let content = system
            .read_to_string(path)
            .with_context(|| format!("Failed to read compose file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse compose file: {}", path.display()))
    }

    /// Parse compose file contents
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not valid YAML
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    /// Declared service names, sorted
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn has_service(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }
}
