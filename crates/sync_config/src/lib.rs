//! Field-mapping configuration for issue synchronization.
//!
//! Turns a declarative XML rule set into a validated, immutable model that
//! describes how records of a local issue tracker correspond to records of a
//! remote system. The model is organised as:
//!
//! - [`Configuration`]: projects, issue types and domains plus their mappings
//! - [`Mapping`]: one direction of field rules and connection details
//! - [`Field`], [`XmlFieldGroup`], [`Template`]: individual rules, sharing
//!   [`GeneralField`] attributes
//!
//! [`SyncConfigLoader`] parses a document, checks that every template
//! placeholder names a declared field and publishes a
//! [`ProjectConfigurations`] table. [`SyncConfigStore`] holds the table that
//! is currently in effect.

pub mod configuration;
pub mod errors;
pub mod field;
pub mod loader;
pub mod mapping;
pub mod markup;
pub mod parser;
pub mod store;
pub mod template;
pub mod validator;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

pub use configuration::Configuration;
pub use errors::{ConfigurationError, ConfigurationResult};
pub use field::{Action, Field, GeneralField, XmlFieldGroup};
pub use loader::{ProjectConfigurations, SyncConfigLoader};
pub use mapping::{Direction, Mapping};
pub use store::SyncConfigStore;
pub use template::{Snapshot, Template};
