//! Cross-reference validation of template placeholders.
//!
//! Every placeholder found in a template's text must name a field declared
//! by the same mapping, either directly in its `fields` or inside one of its
//! XML field groups. Unresolved placeholders are reported as one
//! human-readable message per offending template.
//!
//! # Examples
//!
//! ```rust
//! use sync_config::{Field, Mapping, Direction, Template};
//! use sync_config::validator::validate_mapping;
//!
//! let mut mapping = Mapping::new(Direction::Inbound);
//! mapping.fields.push(Field { id: Some("summary".to_string()), ..Field::default() });
//! mapping.templates.push(Template {
//!     template_text: "%summary% / %owner%".to_string(),
//!     ..Template::default()
//! });
//!
//! let message = validate_mapping(&mapping, "Inbound").unwrap();
//! assert_eq!(
//!     message,
//!     "Inbound mapping - following items do not contain field declaration: %owner%. "
//! );
//! ```

use crate::mapping::Mapping;
use crate::template::Template;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Check every template of `mapping` against its declared field ids.
///
/// Returns `None` when every placeholder resolves. Otherwise returns the
/// concatenated messages of all templates with unresolved placeholders,
/// each tagged with `direction_label`.
pub fn validate_mapping(mapping: &Mapping, direction_label: &str) -> Option<String> {
    for id in mapping.duplicate_field_ids() {
        warn!(
            direction = direction_label,
            field_id = id,
            "Field id declared more than once in mapping"
        );
    }

    let declared = mapping.declared_field_ids();
    let mut message = String::new();

    for template in &mapping.templates {
        let unresolved = match unresolved_placeholders(template, &declared) {
            Ok(unresolved) => unresolved,
            Err(err) => {
                message.push_str(&format!(
                    "{} mapping - placeholder delimiters '{}' and '{}' cannot be matched: {}. ",
                    direction_label, template.id_prefix, template.id_suffix, err
                ));
                continue;
            }
        };
        if unresolved.is_empty() {
            continue;
        }

        message.push_str(&format!(
            "{} mapping - following items do not contain field declaration: {}. ",
            direction_label,
            unresolved.join(", ")
        ));
    }

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Placeholders of `template` whose id is not in `declared`.
///
/// Every occurrence is reported, duplicates included, in text order.
pub fn unresolved_placeholders(
    template: &Template,
    declared: &HashSet<&str>,
) -> Result<Vec<String>, regex::Error> {
    Ok(placeholder_matches(template)?
        .into_iter()
        .filter(|(_, id)| !declared.contains(id.as_str()))
        .map(|(placeholder, _)| placeholder)
        .collect())
}

/// All `(placeholder, id)` pairs found in the template text.
pub fn placeholder_matches(template: &Template) -> Result<Vec<(String, String)>, regex::Error> {
    let regex = placeholder_regex(&template.id_prefix, &template.id_suffix)?;
    Ok(regex
        .captures_iter(&template.template_text)
        .map(|caps| (caps[0].to_string(), caps[1].to_string()))
        .collect())
}

/// Non-greedy placeholder pattern built from literal delimiters.
fn placeholder_regex(prefix: &str, suffix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "{}(.*?){}",
        regex::escape(prefix),
        regex::escape(suffix)
    ))
}
