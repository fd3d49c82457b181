//! Field-level mapping rules.
//!
//! A mapping is made of single-value correspondences ([`Field`]), groups of
//! fields whose values live inside another field's XML payload
//! ([`XmlFieldGroup`]) and M:1 templates (see [`crate::template`]). Fields and
//! templates share the attribute bag [`GeneralField`] by composition.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;

/// The `fieldType` value that marks a custom field.
pub const CUSTOM_FIELD_TYPE: &str = "custom";

/// The `contentType` value that marks HTML content.
pub const HTML_CONTENT_TYPE: &str = "html";

/// Action to take on the target record when a field changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Update,
}

impl Action {
    /// Look up an action by name, ignoring case.
    ///
    /// Unrecognized names yield `None` (unset) rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_config::Action;
    ///
    /// assert_eq!(Action::parse("update"), Some(Action::Update));
    /// assert_eq!(Action::parse("merge"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CREATE" => Some(Action::Create),
            "UPDATE" => Some(Action::Update),
            _ => None,
        }
    }

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Update => "UPDATE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a boolean attribute against its default.
///
/// Only the literals `"true"` and `"false"` (any case) are recognized.
/// A missing attribute or any other text falls back to `default`.
///
/// # Examples
///
/// ```
/// use sync_config::field::parse_flag;
///
/// assert!(parse_flag(Some("TRUE"), false));
/// assert!(!parse_flag(Some("yes"), false));
/// assert!(parse_flag(Some("no"), true));
/// assert!(!parse_flag(Some("False"), true));
/// assert!(parse_flag(None, true));
/// ```
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

/// Attributes shared by plain fields and templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralField {
    /// Namespace of the remote property.
    pub namespace: Option<String>,

    /// Local name of the remote property.
    pub name: Option<String>,

    /// Free-form field type; `"custom"` is the recognized value.
    pub field_type: Option<String>,

    /// Free-form content type; `"html"` is the recognized value.
    pub content_type: Option<String>,

    /// Name of the local issue field this rule maps to.
    pub map_to: Option<String>,

    pub action: Option<Action>,

    /// Translation table applied to source values.
    pub value_mapping: Option<BTreeMap<String, String>>,

    /// Whether a change of this field should raise a notification.
    pub notify_change: bool,

    /// Value used when the value mapping has no entry for the source value.
    pub default_value: Option<String>,
}

impl GeneralField {
    /// Whether the field type is `"custom"` (case-insensitive).
    pub fn is_custom(&self) -> bool {
        self.field_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(CUSTOM_FIELD_TYPE))
    }

    /// Whether the content type is `"html"` (case-insensitive).
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(HTML_CONTENT_TYPE))
    }
}

impl Default for GeneralField {
    fn default() -> Self {
        Self {
            namespace: None,
            name: None,
            field_type: None,
            content_type: None,
            map_to: None,
            action: None,
            value_mapping: None,
            notify_change: true,
            default_value: None,
        }
    }
}

impl AsRef<GeneralField> for GeneralField {
    fn as_ref(&self) -> &GeneralField {
        self
    }
}

/// A single value correspondence between the local issue and the remote record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    #[serde(flatten)]
    pub general: GeneralField,

    /// Identifier referenced by template placeholders.
    pub id: Option<String>,

    /// Location of the value in the remote record's XML payload.
    pub xpath: Option<String>,

    /// Keep markup tags in the value instead of stripping them.
    pub keep_tags: bool,

    /// HTML-escape the value before writing it.
    pub encode_html: bool,

    pub to_date_format: Option<String>,
    pub from_date_format: Option<String>,
}

impl AsRef<GeneralField> for Field {
    fn as_ref(&self) -> &GeneralField {
        &self.general
    }
}

/// Fields whose values live inside the XML content of another field.
///
/// Only one level of nesting is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XmlFieldGroup {
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub fields: Vec<Field>,
}
