//! One direction of field correspondence rules.

use crate::field::{Field, XmlFieldGroup};
use crate::template::Template;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;

/// Direction of a mapping relative to the local issue tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Remote record to local issue.
    Inbound,
    /// Local issue to remote record.
    Outbound,
}

impl Direction {
    /// Label used to tag validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Inbound => "Inbound",
            Direction::Outbound => "Outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field rules plus connection details for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub direction: Direction,

    /// Custom headers sent to the remote system.
    pub headers: BTreeMap<String, String>,

    pub rdf_types: BTreeSet<String>,

    /// Basic-auth user name, plain text as configured.
    pub username: Option<String>,

    /// Basic-auth password, plain text as configured.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    pub fields: Vec<Field>,
    pub xml_field_configs: Vec<XmlFieldGroup>,
    pub templates: Vec<Template>,
}

impl Mapping {
    /// Create an empty mapping for `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            headers: BTreeMap::new(),
            rdf_types: BTreeSet::new(),
            username: None,
            password: None,
            fields: Vec::new(),
            xml_field_configs: Vec::new(),
            templates: Vec::new(),
        }
    }

    /// Top-level fields followed by the fields of every XML group.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .chain(self.xml_field_configs.iter().flat_map(|g| g.fields.iter()))
    }

    /// Identifiers that template placeholders may refer to.
    ///
    /// Template-level attributes never contribute to this set.
    pub fn declared_field_ids(&self) -> HashSet<&str> {
        self.all_fields().filter_map(|f| f.id.as_deref()).collect()
    }

    /// First field declaring `id`, top-level fields before XML groups.
    pub fn field_by_id(&self, id: &str) -> Option<&Field> {
        self.all_fields().find(|f| f.id.as_deref() == Some(id))
    }

    /// Identifiers declared by more than one field, in first-seen order.
    pub fn duplicate_field_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for id in self.all_fields().filter_map(|f| f.id.as_deref()) {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}
