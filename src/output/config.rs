//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Attribute, size and time columns before the name
    pub long_format: bool,
    pub human_sizes: bool,
    /// Creation time column (long format only)
    pub show_created: bool,
    /// Owner column (long format only)
    pub show_owner: bool,
    /// Append `/`, `@` or `*` after names
    pub classify: bool,
    /// Append the full path after names
    pub full_path: bool,
    pub show_summary: bool,
}
