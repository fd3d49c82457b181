//! Command modules for the sync-config CLI.
//!
//! - `document_cmd`: load, validate and inspect mapping documents
//! - `transform_cmd`: run the field value transformations on ad-hoc input

pub mod document_cmd;
pub mod transform_cmd;
