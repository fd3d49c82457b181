//! Scoping unit binding projects to their mapping rules.

use crate::mapping::{Direction, Mapping};
use serde::Serialize;
use std::collections::BTreeSet;

/// Mapping rules that apply to a set of projects, issue types and domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub projects: BTreeSet<String>,
    pub issue_types: BTreeSet<String>,
    pub domains: BTreeSet<String>,

    /// Name of the issue field receiving sync status text.
    pub error_log_name: Option<String>,

    pub inbound_mappings: Vec<Mapping>,
    pub outbound_mappings: Vec<Mapping>,
}

impl Configuration {
    /// Mappings of the given direction, in document order.
    pub fn mappings(&self, direction: Direction) -> &[Mapping] {
        match direction {
            Direction::Inbound => &self.inbound_mappings,
            Direction::Outbound => &self.outbound_mappings,
        }
    }
}
