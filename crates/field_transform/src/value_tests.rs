//! Tests for value-mapping lookup.

use super::*;
use std::collections::BTreeMap;
use sync_config::{Field, Template};

fn field(entries: &[(&str, &str)], default: Option<&str>) -> Field {
    let mapping: BTreeMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut field = Field::default();
    field.general.value_mapping = Some(mapping);
    field.general.default_value = default.map(str::to_string);
    field
}

/// Verify a mapped key wins over the default.
#[test]
fn test_map_to_value_mapped_key() {
    let field = field(&[("A", "1"), ("B", "2")], Some("X"));

    assert_eq!(map_to_value("A", &field), "1");
    assert_eq!(map_to_value("B", &field), "2");
}

/// Verify an unmapped key falls back to the default.
#[test]
fn test_map_to_value_default() {
    let field = field(&[("A", "1")], Some("X"));

    assert_eq!(map_to_value("C", &field), "X");
}

/// Verify an unmapped key without default passes through unchanged.
#[test]
fn test_map_to_value_passthrough() {
    let field = field(&[("A", "1")], None);

    assert_eq!(map_to_value("C", &field), "C");
}

/// Verify the default applies even without a value mapping.
#[test]
fn test_map_to_value_default_without_mapping() {
    let mut field = Field::default();
    field.general.default_value = Some("fallback".to_string());

    assert_eq!(map_to_value("anything", &field), "fallback");
    assert_eq!(map_to_value("x", &Field::default()), "x");
}

/// Verify lookup is exact: no case folding or trimming.
#[test]
fn test_map_to_value_exact_match_only() {
    let field = field(&[("Open", "To Do")], None);

    assert_eq!(map_to_value("open", &field), "open");
    assert_eq!(map_to_value(" Open", &field), " Open");
}

/// Verify templates use the same lookup through their shared attributes.
#[test]
fn test_map_to_value_for_template() {
    let mut template = Template::default();
    template.general.default_value = Some("n/a".to_string());

    assert_eq!(map_to_value("anything", &template), "n/a");
    assert_eq!(map_to_value("anything", &template.general), "n/a");
}
