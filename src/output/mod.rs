//! Listing formatting and display
//!
//! This module turns what the listing engine emits into text or JSON:
//! - Console output with colors, one formatter per walk shape
//! - JSON output collected over every root
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `format` - Size, time, attribute and owner strings
//! - `flat` - Formatter for per-directory blocks
//! - `tree` - Formatter for indented tree lines
//! - `json` - JSON document collection and printing

mod config;
mod flat;
mod format;
mod json;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use flat::FlatFormatter;
pub use format::{
    format_attributes, format_size, format_time, is_executable_name, owner_of, type_indicator,
};
pub use json::{
    JsonCollector, JsonDirectory, JsonDocument, JsonEntry, JsonEvent, JsonRoot, print_json,
};
pub use tree::TreeFormatter;
