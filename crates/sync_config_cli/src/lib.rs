//! sync-config CLI library exports for testing.
//!
//! This module exposes command implementations and settings handling.

pub mod commands;
pub mod config;
pub mod errors;
