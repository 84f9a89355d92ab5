//! lk - A directory lister with sorting, filtering, recursion and tree views

pub mod entry;
pub mod error;
pub mod listing;
pub mod output;
pub mod pattern;
pub mod sort;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, TypeTag};
pub use error::ListError;
pub use listing::{
    DirectoryListing, DirectorySource, FilterConfig, FsSource, ListingConfig, ListingOutput,
    ListingWalker, PathSpec, Summary, TraversalConfig, TreeEvent, TreeOutput, TreeWalker,
    WalkReport, aggregate, describe_path, read_directory,
};
pub use output::{FlatFormatter, JsonCollector, OutputConfig, TreeFormatter, print_json};
pub use pattern::{contains_wildcard, matches};
pub use sort::{SortConfig, SortKey, compare_entries, natural_compare, sort_entries};
