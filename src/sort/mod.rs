//! Entry ordering
//!
//! - `natural` - numeric-aware and plain case-insensitive string comparison
//! - `config` - sort key selection
//! - `comparator` - the multi-key comparator used to sort entry lists

mod comparator;
mod config;
mod natural;

pub use comparator::{compare_entries, sort_entries};
pub use config::{SortConfig, SortKey};
pub use natural::{compare_ignore_case, natural_compare};
