use sync_config::GeneralField;

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;

/// Translate `value` through the field's value mapping.
///
/// An exact key match in the value mapping wins. Otherwise the field's
/// default value is used if one is configured, and `value` is returned
/// unchanged as a last resort. Keys are compared as-is, without any
/// normalization.
///
/// # Examples
///
/// ```rust
/// use field_transform::map_to_value;
/// use sync_config::Field;
///
/// let mut field = Field::default();
/// field.general.value_mapping = Some([("Open".to_string(), "To Do".to_string())].into());
///
/// assert_eq!(map_to_value("Open", &field), "To Do");
/// assert_eq!(map_to_value("open", &field), "open");
/// ```
pub fn map_to_value<F>(value: &str, field: &F) -> String
where
    F: AsRef<GeneralField> + ?Sized,
{
    let general = field.as_ref();

    if let Some(mapped) = general
        .value_mapping
        .as_ref()
        .and_then(|mapping| mapping.get(value))
    {
        return mapped.clone();
    }

    match &general.default_value {
        Some(default) => default.clone(),
        None => value.to_string(),
    }
}
