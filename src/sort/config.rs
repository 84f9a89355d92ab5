//! Sort configuration types

/// Primary key used to order entries. Name is always the final tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Time,
    Extension,
}

impl SortKey {
    /// Resolve command-line style sort flags into a single key.
    ///
    /// Time wins over size, which wins over extension. With no flag set the
    /// key is name.
    pub fn from_flags(time: bool, size: bool, extension: bool) -> Self {
        if time {
            SortKey::Time
        } else if size {
            SortKey::Size
        } else if extension {
            SortKey::Extension
        } else {
            SortKey::Name
        }
    }
}

/// Configuration for ordering an entry list.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Directories before everything else. Not affected by `reverse`.
    pub group_directories_first: bool,
    pub key: SortKey,
    /// Numeric-aware name comparison.
    pub natural: bool,
    pub reverse: bool,
}
