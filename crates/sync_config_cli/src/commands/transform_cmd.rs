//! Ad-hoc value transformations.

use clap::Subcommand;
use field_transform::{convert_to_html, encode_html, encode_tag_name};

/// Transformations that can be run from the command line
#[derive(Subcommand, Debug)]
pub enum TransformCommands {
    /// Encode a name for use as an XML tag name
    EncodeTag { name: String },

    /// HTML-escape a text
    EscapeHtml { text: String },

    /// Replace line breaks with <BR/> markers
    ToHtml { text: String },
}

/// Run a transformation and return its result.
pub fn execute(cmd: &TransformCommands) -> String {
    match cmd {
        TransformCommands::EncodeTag { name } => encode_tag_name(name),
        TransformCommands::EscapeHtml { text } => encode_html(text),
        TransformCommands::ToHtml { text } => convert_to_html(text),
    }
}
