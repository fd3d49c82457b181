//! Holder for the currently published project table.
//!
//! Consumers receive a `SyncConfigStore` explicitly instead of reaching for
//! a process-wide value. A reload swaps the whole table at once and only
//! after the new document loaded successfully, so readers always observe
//! either the old or the new table and never a mix.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::loader::{ProjectConfigurations, SyncConfigLoader};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Thread-safe holder of the published project table.
///
/// # Examples
///
/// ```rust
/// use sync_config::SyncConfigStore;
///
/// let store = SyncConfigStore::new();
/// assert!(store.current().is_empty());
///
/// store.reload("<configurations><configuration><projects><project>ABC</project></projects></configuration></configurations>")?;
/// assert!(store.configuration_for("ABC").is_some());
///
/// // A failed reload keeps the previous table.
/// assert!(store.reload("<configurations>").is_err());
/// assert!(store.configuration_for("ABC").is_some());
/// # Ok::<(), sync_config::ConfigurationError>(())
/// ```
#[derive(Debug, Default)]
pub struct SyncConfigStore {
    loader: SyncConfigLoader,
    current: RwLock<Arc<ProjectConfigurations>>,
}

impl SyncConfigStore {
    /// Create a store with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store publishing an already loaded table.
    pub fn with_configurations(configurations: ProjectConfigurations) -> Self {
        Self {
            loader: SyncConfigLoader::new(),
            current: RwLock::new(Arc::new(configurations)),
        }
    }

    /// The table currently published.
    pub fn current(&self) -> Arc<ProjectConfigurations> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Configuration currently registered for `project`.
    pub fn configuration_for(&self, project: &str) -> Option<Arc<Configuration>> {
        self.current().get(project).cloned()
    }

    /// Load `document` and publish it if it is valid.
    ///
    /// On failure the previously published table stays in place and the
    /// load error is returned.
    pub fn reload(&self, document: &str) -> ConfigurationResult<Arc<ProjectConfigurations>> {
        let table = match self.loader.load(document) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                warn!(error = %err, "Keeping previously published configuration");
                return Err(err);
            }
        };

        self.replace(Arc::clone(&table));
        info!(projects = table.len(), "Sync configuration reloaded");
        Ok(table)
    }

    /// Publish `table`, returning the table it replaced.
    pub fn replace(&self, table: Arc<ProjectConfigurations>) -> Arc<ProjectConfigurations> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, table)
    }
}
