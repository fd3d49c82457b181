//! Markup capture helpers.
//!
//! The template text of a `templateField` is the inner markup of its
//! `template` element. It is produced by serializing the element's subtree
//! back to text and then stripping the element's own start and end tags,
//! so the captured text does not depend on how the source document was
//! formatted around the element.

use roxmltree::{Node, NodeType};

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;

const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Serialize `node` and everything below it to XML text.
pub fn serialize_subtree(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Remove the start and end tag of the element `tag` from serialized markup.
///
/// A self-closing element yields an empty string. Text that does not start
/// with the expected start tag is returned unchanged.
pub fn strip_outer_tags(serialized: &str, tag: &str) -> String {
    let open = format!("<{}", tag);
    let rest = match serialized.strip_prefix(open.as_str()) {
        Some(rest) if rest.starts_with(['>', '/', ' ']) => rest,
        _ => return serialized.to_string(),
    };
    let Some(end) = rest.find('>') else {
        return serialized.to_string();
    };
    if rest[..end].ends_with('/') {
        return String::new();
    }

    let inner = &rest[end + 1..];
    let close = format!("</{}>", tag);
    inner.strip_suffix(close.as_str()).unwrap_or(inner).to_string()
}

/// The verbatim inner markup of an element.
pub fn inner_markup(node: Node<'_, '_>) -> String {
    strip_outer_tags(&serialize_subtree(node), &qualified_name(node))
}

/// Concatenated text of every text node below `node`.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Element name including its namespace prefix, if any.
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    prefixed(node, tag.namespace(), tag.name())
}

fn prefixed(node: Node<'_, '_>, namespace: Option<&str>, name: &str) -> String {
    let prefix = match namespace {
        Some(NS_XML) => Some("xml"),
        Some(uri) => node.lookup_prefix(uri).filter(|p| !p.is_empty()),
        None => None,
    };
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, name),
        None => name.to_string(),
    }
}

fn write_node(node: Node<'_, '_>, out: &mut String) {
    match node.node_type() {
        NodeType::Root => {
            for child in node.children() {
                write_node(child, out);
            }
        }
        NodeType::Element => write_element(node, out),
        NodeType::Text => escape_into(node.text().unwrap_or_default(), false, out),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text().unwrap_or_default());
            out.push_str("-->");
        }
        NodeType::PI => {
            if let Some(pi) = node.pi() {
                out.push_str("<?");
                out.push_str(pi.target);
                if let Some(value) = pi.value {
                    out.push(' ');
                    out.push_str(value);
                }
                out.push_str("?>");
            }
        }
    }
}

fn write_element(node: Node<'_, '_>, out: &mut String) {
    let name = qualified_name(node);
    out.push('<');
    out.push_str(&name);

    // Only declarations introduced on this element; inherited ones stay on the ancestor.
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();
    for ns in node.namespaces() {
        if ns.uri() == NS_XML || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        match ns.name() {
            Some(prefix) => {
                out.push_str(" xmlns:");
                out.push_str(prefix);
            }
            None => out.push_str(" xmlns"),
        }
        out.push_str("=\"");
        escape_into(ns.uri(), true, out);
        out.push('"');
    }

    for attr in node.attributes() {
        out.push(' ');
        out.push_str(&prefixed(node, attr.namespace(), attr.name()));
        out.push_str("=\"");
        escape_into(attr.value(), true, out);
        out.push('"');
    }

    if !node.has_children() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in node.children() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
