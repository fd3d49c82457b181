//! Loading a mapping document into a published project table.
//!
//! Loading is a single synchronous pass: the document is parsed, every
//! mapping of every configuration is validated, and only when no mapping
//! produced a validation message is the project table built. A failed load
//! never yields a partial table.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::mapping::Direction;
use crate::parser::parse_configurations;
use crate::validator::validate_mapping;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Immutable lookup table from project key to its configuration.
///
/// Several project keys usually share one configuration, so configurations
/// are reference counted rather than cloned per key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfigurations {
    by_project: HashMap<String, Arc<Configuration>>,
    configurations: Vec<Arc<Configuration>>,
}

impl ProjectConfigurations {
    /// Build the table from configurations in document order.
    ///
    /// When a project key appears in several configurations the later one
    /// wins; no merge takes place and no error is raised.
    pub fn from_configurations(configurations: Vec<Configuration>) -> Self {
        let configurations: Vec<Arc<Configuration>> =
            configurations.into_iter().map(Arc::new).collect();

        let mut by_project = HashMap::new();
        for configuration in &configurations {
            for project in &configuration.projects {
                if by_project
                    .insert(project.clone(), Arc::clone(configuration))
                    .is_some()
                {
                    debug!(project = %project, "Project claimed by a later configuration");
                }
            }
        }

        Self {
            by_project,
            configurations,
        }
    }

    /// Configuration registered for `project`.
    pub fn get(&self, project: &str) -> Option<&Arc<Configuration>> {
        self.by_project.get(project)
    }

    /// Project keys in sorted order.
    pub fn project_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_project.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Configuration>)> {
        self.by_project.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.by_project.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_project.is_empty()
    }

    /// Every configuration of the source document, in document order.
    pub fn configurations(&self) -> &[Arc<Configuration>] {
        &self.configurations
    }
}

/// Loads sync mapping documents.
///
/// # Examples
///
/// ```rust
/// use sync_config::SyncConfigLoader;
///
/// let document = r#"
/// <configurations>
///   <configuration>
///     <projects><project>ABC</project></projects>
///     <mappings>
///       <mappingIn>
///         <fields><field id="summary" mapTo="summary"/></fields>
///         <templateFields>
///           <templateField mapTo="description"><template>%summary%</template></templateField>
///         </templateFields>
///       </mappingIn>
///     </mappings>
///   </configuration>
/// </configurations>"#;
///
/// let table = SyncConfigLoader::new().load(document)?;
/// let configuration = table.get("ABC").unwrap();
/// assert_eq!(configuration.inbound_mappings[0].templates[0].template_text, "%summary%");
/// # Ok::<(), sync_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncConfigLoader;

impl SyncConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse, validate and publish a mapping document.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::ParseError` - The document is not well-formed XML
    /// * `ConfigurationError::ValidationFailed` - At least one template
    ///   placeholder does not resolve; the message lists every violation of
    ///   the whole document, inbound mappings first
    #[instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn load(&self, document: &str) -> ConfigurationResult<ProjectConfigurations> {
        let configurations = parse_configurations(document)?;

        let mut inbound_messages = String::new();
        let mut outbound_messages = String::new();

        for configuration in &configurations {
            for direction in [Direction::Inbound, Direction::Outbound] {
                let messages = match direction {
                    Direction::Inbound => &mut inbound_messages,
                    Direction::Outbound => &mut outbound_messages,
                };
                for mapping in configuration.mappings(direction) {
                    if let Some(message) = validate_mapping(mapping, direction.label()) {
                        messages.push_str(&message);
                    }
                }
            }
        }

        if !inbound_messages.is_empty() || !outbound_messages.is_empty() {
            let message = inbound_messages + &outbound_messages;
            warn!(error = %message, "Mapping document failed validation");
            return Err(ConfigurationError::ValidationFailed { message });
        }

        let table = ProjectConfigurations::from_configurations(configurations);
        info!(
            projects = table.len(),
            configurations = table.configurations().len(),
            "Published sync configuration"
        );

        Ok(table)
    }
}
