//! Text helpers applied to field values.

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

/// Marker that replaces line breaks in HTML content.
pub const HTML_LINE_BREAK: &str = "<BR/>";

/// Encode a name so it can be used as an XML tag name.
///
/// ASCII letters and digits pass through. Every other character becomes
/// `_<hex>_`, where `<hex>` is its lowercase hexadecimal code point.
///
/// # Examples
///
/// ```rust
/// use field_transform::encode_tag_name;
///
/// assert_eq!(encode_tag_name("a!"), "a_21_");
/// assert_eq!(encode_tag_name("a b"), "a_20_b");
/// ```
pub fn encode_tag_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            encoded.push(c);
        } else {
            encoded.push_str(&format!("_{:x}_", u32::from(c)));
        }
    }
    encoded
}

/// Replace every newline with [`HTML_LINE_BREAK`].
pub fn convert_to_html(text: &str) -> String {
    text.replace('\n', HTML_LINE_BREAK)
}

/// Escape HTML special characters.
///
/// Uses the handlebars escaper, which covers `<`, `>`, `&`, `"`, `'`,
/// `` ` `` and `=`.
pub fn encode_html(text: &str) -> String {
    handlebars::html_escape(text)
}

/// Concatenate two optional texts, treating a missing one as absent.
pub fn append_text(first: Option<&str>, second: Option<&str>) -> Option<String> {
    match (first, second) {
        (None, None) => None,
        (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
        (Some(first), Some(second)) => Some(format!("{}{}", first, second)),
    }
}

/// Join items with a newline after every item, the last one included.
pub fn convert_string_list_to_text<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().fold(String::new(), |mut text, item| {
        text.push_str(item.as_ref());
        text.push('\n');
        text
    })
}
