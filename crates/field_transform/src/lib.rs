//! Value transformations for synchronized fields.
//!
//! Pure string functions the sync engine applies to field values at render
//! time: value-mapping lookup with defaulting, tag-name encoding, text to
//! HTML conversion, HTML escaping and the two-section sync status log.
//!
//! Every function is stateless and safe to call from any thread.
//!
//! # Examples
//!
//! ```rust
//! use field_transform::{create_sync_status, encode_tag_name};
//!
//! assert_eq!(encode_tag_name("Story Points"), "Story_20_Points");
//!
//! let status = create_sync_status(None, Some("Updated 3 fields"), true);
//! assert_eq!(status, "---Inbound sync---\nUpdated 3 fields");
//! ```

mod sync_status;
mod text;
mod value;

pub use sync_status::{create_sync_status, INBOUND_MARKER, OUTBOUND_MARKER};
pub use text::{
    append_text, convert_string_list_to_text, convert_to_html, encode_html, encode_tag_name,
    HTML_LINE_BREAK,
};
pub use value::map_to_value;
