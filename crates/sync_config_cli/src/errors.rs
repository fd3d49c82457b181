use std::io;

use sync_config::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the sync-config CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// The CLI settings are missing, unreadable or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a file from the filesystem.
    #[error("Failed to load file: {0}")]
    LoadFile(io::Error),

    /// The settings file is not valid TOML.
    #[error("Failed to parse TOML settings file: {0}")]
    ParseTomlFile(toml::de::Error),

    /// The mapping document failed to parse or validate.
    #[error(transparent)]
    Load(#[from] ConfigurationError),

    /// No configuration is registered for the requested project.
    #[error("No configuration found for project '{0}'")]
    ProjectNotFound(String),

    /// A configuration could not be rendered as JSON.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
