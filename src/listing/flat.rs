//! Flat listing walker - one block per directory, optionally recursive

use std::io;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::ListError;
use crate::sort::sort_entries;

use super::config::ListingConfig;
use super::reader::{DirectorySource, FsSource, PathSpec, read_filtered};
use super::report::WalkReport;
use super::summary::{Summary, aggregate};

/// One visited directory, handed to the output in pre-order.
#[derive(Debug)]
pub struct DirectoryListing<'a> {
    pub path: &'a Path,
    /// 0 for the root of the walk
    pub depth: usize,
    /// Visible entries in sorted order
    pub entries: &'a [Entry],
    /// Present when summaries are enabled
    pub summary: Option<Summary>,
}

/// Callback for flat output - receives each directory block for display.
pub trait ListingOutput {
    fn output_directory(&mut self, listing: &DirectoryListing<'_>) -> io::Result<()>;

    /// A single path shown as itself rather than as a directory's contents.
    fn output_described(&mut self, path: &Path, entry: &Entry) -> io::Result<()> {
        self.output_directory(&DirectoryListing {
            path,
            depth: 0,
            entries: std::slice::from_ref(entry),
            summary: None,
        })
    }
}

/// Walks directories depth-first, emitting each level's sorted entries
/// before descending into its subdirectories.
///
/// Links are listed but never entered, and descent stops at the configured
/// depth limit.
pub struct ListingWalker<S = FsSource> {
    config: ListingConfig,
    source: S,
}

impl ListingWalker<FsSource> {
    pub fn new(config: ListingConfig) -> Self {
        Self {
            config,
            source: FsSource,
        }
    }
}

impl<S: DirectorySource> ListingWalker<S> {
    /// Read directories from a different source.
    pub fn with_source<T: DirectorySource>(self, source: T) -> ListingWalker<T> {
        ListingWalker {
            config: self.config,
            source,
        }
    }

    /// Walk from a path spec. Fails only if the root cannot be read or the
    /// output cannot be written; unreadable subdirectories land in the report.
    pub fn walk<O: ListingOutput>(
        &self,
        spec: &PathSpec,
        output: &mut O,
    ) -> Result<WalkReport, ListError> {
        let mut report = WalkReport::default();
        self.walk_dir(spec.directory(), spec.pattern(), 0, output, &mut report)?;
        Ok(report)
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        dir: &Path,
        pattern: Option<&str>,
        depth: usize,
        output: &mut O,
        report: &mut WalkReport,
    ) -> Result<(), ListError> {
        let mut entries = read_filtered(&self.source, dir, pattern, &self.config.filter)?;
        sort_entries(&mut entries, &self.config.sort);

        let level = aggregate(&entries);
        report.totals.combine(&level);
        report.directories_listed += 1;

        output.output_directory(&DirectoryListing {
            path: dir,
            depth,
            entries: &entries,
            summary: self.config.traversal.summarize.then_some(level),
        })?;

        let traversal = &self.config.traversal;
        if !traversal.recursive || traversal.tree_mode {
            return Ok(());
        }

        let children: Vec<PathBuf> = entries
            .iter()
            .filter(|e| e.is_descendable())
            .map(|e| dir.join(&e.name))
            .collect();
        drop(entries);

        if !traversal.may_descend(depth) {
            if !children.is_empty() {
                log::debug!("depth limit reached at {}", dir.display());
                report.depth_limited += children.len();
            }
            return Ok(());
        }

        for child in children {
            match self.walk_dir(&child, None, depth + 1, output, report) {
                Ok(()) => {}
                Err(e @ ListError::DirectoryUnreadable { .. }) => {
                    log::warn!("{}", e);
                    report.skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}
