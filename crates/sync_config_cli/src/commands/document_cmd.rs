//! Mapping document commands.
//!
//! Each command returns the text to print so callers decide where output goes.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use sync_config::{Direction, ProjectConfigurations, SyncConfigLoader};
use tracing::{debug, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "document_cmd_tests.rs"]
mod tests;

/// Read and load the mapping document at `path`.
#[instrument]
pub fn load_document(path: &Path) -> Result<ProjectConfigurations, Error> {
    let document = fs::read_to_string(path).map_err(Error::LoadFile)?;
    debug!(bytes = document.len(), "Read mapping document");

    Ok(SyncConfigLoader::new().load(&document)?)
}

/// Validate the document and summarize what it publishes.
pub fn validate(path: &Path) -> Result<String, Error> {
    let table = load_document(path)?;

    Ok(format!(
        "{}: valid ({} configuration(s), {} project(s))",
        path.display(),
        table.configurations().len(),
        table.len()
    ))
}

/// List every project key with its inbound and outbound mapping counts.
pub fn projects(path: &Path) -> Result<String, Error> {
    let table = load_document(path)?;

    let mut output = String::new();
    for key in table.project_keys() {
        let Some(configuration) = table.get(key) else {
            continue;
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            output,
            "{}\tinbound={}\toutbound={}",
            key,
            configuration.mappings(Direction::Inbound).len(),
            configuration.mappings(Direction::Outbound).len()
        );
    }
    Ok(output)
}

/// Render the configuration of `project` as pretty-printed JSON.
pub fn show(path: &Path, project: &str) -> Result<String, Error> {
    let table = load_document(path)?;
    let configuration = table
        .get(project)
        .ok_or_else(|| Error::ProjectNotFound(project.to_string()))?;

    Ok(serde_json::to_string_pretty(configuration.as_ref())?)
}
