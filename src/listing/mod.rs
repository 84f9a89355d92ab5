//! Directory listing engine
//!
//! This module reads, filters, sorts and walks directories. It supports two
//! walk shapes:
//!
//! - `ListingWalker`: one sorted block per directory, optionally recursive
//! - `TreeWalker`: one indented, type-tagged line per entry
//!
//! Both walkers take their configuration by value, read through a
//! `DirectorySource`, and stream results to an output trait so only one
//! entry list per active depth is alive at a time.

mod config;
mod filter;
mod flat;
mod reader;
mod report;
mod summary;
mod tree;

// Re-export public types
pub use config::{FilterConfig, ListingConfig, MAX_DEPTH_CEILING, TraversalConfig};
pub use filter::{EntryFilter, visible};
pub use flat::{DirectoryListing, ListingOutput, ListingWalker};
pub use reader::{DirectorySource, FsEntries, FsSource, PathSpec, describe_path, read_directory};
pub use report::WalkReport;
pub use summary::{Summary, aggregate};
pub use tree::{INDENT_WIDTH, TreeEvent, TreeOutput, TreeWalker, indent_for};
