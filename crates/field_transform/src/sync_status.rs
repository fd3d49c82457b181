//! Two-section synchronization status log.
//!
//! The status text kept on an issue holds at most one inbound and one
//! outbound section. Each section starts with its marker line followed by
//! the trimmed status text:
//!
//! ```text
//! ---Inbound sync---
//! 2 fields updated
//!
//! ---Outbound sync---
//! Remote record rejected the update
//! ```

#[cfg(test)]
#[path = "sync_status_tests.rs"]
mod tests;

/// Marker line introducing the inbound section.
pub const INBOUND_MARKER: &str = "---Inbound sync---";

/// Marker line introducing the outbound section.
pub const OUTBOUND_MARKER: &str = "---Outbound sync---";

/// Update one direction's section of the status log.
///
/// `new_status` replaces the section of the given direction; `None` or a
/// blank status removes it. The other direction's last section in
/// `current` is kept, trimmed. When both sections exist the inbound one
/// comes first and they are separated by a blank line.
///
/// # Examples
///
/// ```rust
/// use field_transform::create_sync_status;
///
/// let inbound = create_sync_status(Some(""), Some("foo"), true);
/// assert_eq!(inbound, "---Inbound sync---\nfoo");
///
/// let both = create_sync_status(Some(&inbound), Some("bar"), false);
/// assert_eq!(both, "---Inbound sync---\nfoo\n\n---Outbound sync---\nbar");
/// ```
pub fn create_sync_status(
    current: Option<&str>,
    new_status: Option<&str>,
    is_inbound: bool,
) -> String {
    let current = current.unwrap_or_default();
    let new_status = new_status.map(str::trim).filter(|s| !s.is_empty());

    let (inbound, outbound) = if is_inbound {
        (new_status, section(current, OUTBOUND_MARKER, INBOUND_MARKER))
    } else {
        (section(current, INBOUND_MARKER, OUTBOUND_MARKER), new_status)
    };

    let sections: Vec<String> = [(INBOUND_MARKER, inbound), (OUTBOUND_MARKER, outbound)]
        .into_iter()
        .filter_map(|(marker, text)| text.map(|text| format!("{}\n{}", marker, text)))
        .collect();

    sections.join("\n\n")
}

/// Trimmed text of the last section introduced by `marker`.
///
/// The section ends at the next `other_marker` or at the end of `content`.
fn section<'a>(content: &'a str, marker: &str, other_marker: &str) -> Option<&'a str> {
    let start = content.rfind(marker)? + marker.len();
    let rest = &content[start..];
    let end = rest.find(other_marker).unwrap_or(rest.len());
    let text = rest[..end].trim();
    (!text.is_empty()).then_some(text)
}
