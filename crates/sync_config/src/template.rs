//! M:1 templates and their rendered snapshots.

use crate::field::{parse_flag, GeneralField};
use serde::Serialize;

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

/// Default placeholder prefix and suffix.
pub const DEFAULT_ID_DELIMITER: &str = "%";

/// A rule that aggregates several field values into one block of text.
///
/// Placeholders in `template_text` take the form
/// `id_prefix + <field id> + id_suffix` and are replaced with field values
/// when the template is rendered.
///
/// # Examples
///
/// ```
/// use sync_config::Template;
///
/// let template = Template::default();
/// assert_eq!(template.placeholder("summary"), "%summary%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    #[serde(flatten)]
    pub general: GeneralField,

    /// Inner markup of the `template` element, captured verbatim.
    pub template_text: String,

    pub id_prefix: String,
    pub id_suffix: String,

    /// Persist the rendered value even when the synchronization fails.
    pub always_save: Option<String>,
}

impl Template {
    /// The placeholder text that refers to the field `id` in this template.
    pub fn placeholder(&self, id: &str) -> String {
        format!("{}{}{}", self.id_prefix, id, self.id_suffix)
    }

    /// Whether `always_save` is set to `"true"` (case-insensitive).
    pub fn always_save(&self) -> bool {
        parse_flag(self.always_save.as_deref(), false)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            general: GeneralField::default(),
            template_text: String::new(),
            id_prefix: DEFAULT_ID_DELIMITER.to_string(),
            id_suffix: DEFAULT_ID_DELIMITER.to_string(),
            always_save: None,
        }
    }
}

impl AsRef<GeneralField> for Template {
    fn as_ref(&self) -> &GeneralField {
        &self.general
    }
}

/// The last rendered value of a template, kept for change detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub template: Template,
    pub value: String,
}

impl Snapshot {
    pub fn new(template: Template, value: impl Into<String>) -> Self {
        Self {
            template,
            value: value.into(),
        }
    }

    /// Whether `candidate` differs from the stored value.
    pub fn has_changed(&self, candidate: &str) -> bool {
        self.value != candidate
    }

    /// Whether the snapshot must be stored even if the sync run failed.
    pub fn should_persist_on_error(&self) -> bool {
        self.template.always_save()
    }
}
