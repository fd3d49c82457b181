//! Settings for the sync-config CLI.
//!
//! The settings are stored in TOML format. They are loaded from an explicit
//! path, or from [`DEFAULT_SETTINGS_FILENAME`] in the current directory when
//! it exists.
//!
//! # Example TOML Settings
//!
//! ```toml
//! document = "config/jira-sync.xml"
//! log_filter = "sync_config=debug,warn"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILENAME: &str = "sync-config.toml";

/// Environment variable holding the log filter
pub const LOG_FILTER_ENV: &str = "SYNC_CONFIG_LOG";

/// Log filter used when neither the environment nor the settings set one
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Settings of the sync-config CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mapping document used when a command is given no file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `sync_config=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Loads settings from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// * `Error::Config` - The file does not exist
    /// * `Error::LoadFile` - The file cannot be read
    /// * `Error::ParseTomlFile` - The file is not valid TOML for these settings
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading settings from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!("Settings file not found: {:?}", path)));
        }

        let content = fs::read_to_string(path).map_err(Error::LoadFile)?;
        toml::from_str(&content).map_err(Error::ParseTomlFile)
    }

    /// Loads settings from `path`, or from the default file if it exists.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields default settings.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_FILENAME);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Saves the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving settings to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(Error::LoadFile)?;
        }

        fs::write(path, content).map_err(Error::LoadFile)?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// The mapping document to load: `file` if given, else the configured one.
    pub fn resolve_document(&self, file: Option<&Path>) -> Result<PathBuf, Error> {
        file.map(Path::to_path_buf)
            .or_else(|| self.document.clone())
            .ok_or_else(|| {
                Error::Config(format!(
                    "No mapping document given and none configured in {}",
                    DEFAULT_SETTINGS_FILENAME
                ))
            })
    }

    /// The log filter from the settings, or the built-in default.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
