//! Mapping document parser.
//!
//! Walks a `<configurations>` document once and builds the data model. The
//! parser applies attribute defaulting but no cross-reference checks; those
//! happen in [`crate::validator`] once every mapping has been built.
//!
//! Optional string attributes that are present but empty are treated as
//! absent, and boolean attributes fall back to their documented default on
//! anything other than a literal `true` or `false`.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::field::{parse_flag, Action, Field, GeneralField, XmlFieldGroup};
use crate::mapping::{Direction, Mapping};
use crate::markup::{inner_markup, text_content};
use crate::template::{Template, DEFAULT_ID_DELIMITER};
use roxmltree::{Document, Node};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

/// Parse every `configuration` element found under a `configurations` element.
///
/// # Errors
///
/// Returns `ConfigurationError::ParseError` if the document is not
/// well-formed XML.
///
/// # Examples
///
/// ```
/// use sync_config::parser::parse_configurations;
///
/// let configurations = parse_configurations(
///     "<configurations><configuration><projects><project>ABC</project></projects></configuration></configurations>",
/// )?;
/// assert_eq!(configurations.len(), 1);
/// assert!(configurations[0].projects.contains("ABC"));
/// # Ok::<(), sync_config::ConfigurationError>(())
/// ```
pub fn parse_configurations(document: &str) -> ConfigurationResult<Vec<Configuration>> {
    let doc = Document::parse(document)?;

    let configurations = doc
        .descendants()
        .filter(|n| n.has_tag_name("configuration"))
        .filter(|n| n.ancestors().skip(1).any(|a| a.has_tag_name("configurations")))
        .map(parse_configuration)
        .collect();

    Ok(configurations)
}

fn parse_configuration(node: Node<'_, '_>) -> Configuration {
    let configuration = Configuration {
        error_log_name: child(node, "errorLog").and_then(|n| attribute(n, "name")),
        projects: text_set(node, "projects", "project"),
        domains: text_set(node, "domains", "domain"),
        issue_types: text_set(node, "issueTypes", "issueType"),
        inbound_mappings: mapping_elements(node, "mappingIn")
            .map(|m| parse_mapping(m, Direction::Inbound))
            .collect(),
        outbound_mappings: mapping_elements(node, "mappingOut")
            .map(|m| parse_mapping(m, Direction::Outbound))
            .collect(),
    };

    debug!(
        projects = ?configuration.projects,
        inbound = configuration.inbound_mappings.len(),
        outbound = configuration.outbound_mappings.len(),
        "Parsed configuration"
    );

    configuration
}

fn mapping_elements<'a, 'input: 'a>(
    configuration: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    children(configuration, "mappings").flat_map(move |m| children(m, name))
}

fn parse_mapping(node: Node<'_, '_>, direction: Direction) -> Mapping {
    let mut mapping = Mapping::new(direction);

    if let Some(connection) = child(node, "connection") {
        parse_connection(connection, &mut mapping);
    }

    mapping.fields = children(node, "fields")
        .flat_map(|f| children(f, "field"))
        .map(parse_field)
        .collect();
    mapping.xml_field_configs = children(node, "xmlFields").map(parse_xml_group).collect();
    mapping.templates = children(node, "templateFields")
        .flat_map(|t| children(t, "templateField"))
        .map(parse_template)
        .collect();

    debug!(
        direction = %direction,
        fields = mapping.fields.len(),
        xml_groups = mapping.xml_field_configs.len(),
        templates = mapping.templates.len(),
        "Parsed mapping"
    );

    mapping
}

fn parse_connection(connection: Node<'_, '_>, mapping: &mut Mapping) {
    mapping.username = attribute(connection, "username");
    mapping.password = attribute(connection, "password");

    for header in children(connection, "headers").flat_map(|h| children(h, "header")) {
        let (Some(name), Some(value)) = (attribute(header, "name"), header.attribute("value"))
        else {
            continue;
        };
        mapping.headers.insert(name, value.to_string());
    }

    mapping.rdf_types = children(connection, "rdfTypes")
        .flat_map(|r| children(r, "rdfType"))
        .filter_map(|r| r.attribute("value"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
}

fn parse_xml_group(node: Node<'_, '_>) -> XmlFieldGroup {
    XmlFieldGroup {
        namespace: attribute(node, "ns"),
        name: attribute(node, "name"),
        fields: group_fields(node),
    }
}

/// Fields of a group, either direct `field` children or wrapped in `fields`.
/// Nested groups are not descended into.
fn group_fields(group: Node<'_, '_>) -> Vec<Field> {
    let mut fields = Vec::new();
    for element in group.children().filter(|n| n.is_element()) {
        match element.tag_name().name() {
            "field" => fields.push(parse_field(element)),
            "fields" => fields.extend(children(element, "field").map(parse_field)),
            _ => {}
        }
    }
    fields
}

fn parse_general(node: Node<'_, '_>) -> GeneralField {
    GeneralField {
        namespace: attribute(node, "ns"),
        name: attribute(node, "name"),
        field_type: attribute(node, "fieldType"),
        content_type: attribute(node, "contentType"),
        map_to: attribute(node, "mapTo"),
        notify_change: parse_flag(node.attribute("notifyChange"), true),
        action: node.attribute("action").and_then(Action::parse),
        value_mapping: parse_value_mapping(node),
        default_value: child(node, "default")
            .and_then(|d| d.attribute("value"))
            .map(str::to_string),
    }
}

fn parse_value_mapping(node: Node<'_, '_>) -> Option<BTreeMap<String, String>> {
    let mut groups = children(node, "maps").peekable();
    groups.peek()?;

    // Later duplicates overwrite earlier ones.
    let mut mapping = BTreeMap::new();
    for entry in groups.flat_map(|m| children(m, "map")) {
        mapping.insert(
            entry.attribute("key").unwrap_or_default().to_string(),
            entry.attribute("value").unwrap_or_default().to_string(),
        );
    }
    Some(mapping)
}

fn parse_field(node: Node<'_, '_>) -> Field {
    Field {
        general: parse_general(node),
        id: attribute(node, "id"),
        xpath: attribute(node, "xpath"),
        keep_tags: parse_flag(node.attribute("keepTags"), false),
        encode_html: parse_flag(node.attribute("encodeHtml"), false),
        to_date_format: attribute(node, "toDateFormat"),
        from_date_format: attribute(node, "fromDateFormat"),
    }
}

fn parse_template(node: Node<'_, '_>) -> Template {
    Template {
        general: parse_general(node),
        template_text: child(node, "template")
            .map(inner_markup)
            .unwrap_or_default(),
        id_prefix: attribute(node, "idPrefix").unwrap_or_else(|| DEFAULT_ID_DELIMITER.to_string()),
        id_suffix: attribute(node, "idSuffix").unwrap_or_else(|| DEFAULT_ID_DELIMITER.to_string()),
        always_save: attribute(node, "alwaysSave"),
    }
}

fn text_set(node: Node<'_, '_>, group: &str, item: &str) -> BTreeSet<String> {
    children(node, group)
        .flat_map(|g| children(g, item))
        .map(|n| text_content(n).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(name))
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |c| c.has_tag_name(name))
}
