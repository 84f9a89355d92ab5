//! Directory reading
//!
//! The engine never calls `std::fs` directly. It goes through
//! [`DirectorySource`], which hands out a lazy one-shot sequence of entries
//! for a directory. [`FsSource`] is the real filesystem; tests substitute an
//! in-memory tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf, is_separator};
use std::time::Instant;

use crate::entry::Entry;
use crate::error::ListError;
use crate::pattern::contains_wildcard;

use super::config::FilterConfig;
use super::filter::EntryFilter;

/// Source of directory entries.
pub trait DirectorySource {
    type Entries: Iterator<Item = io::Result<Entry>>;

    /// Start enumerating the children of `dir`.
    fn entries(&self, dir: &Path) -> io::Result<Self::Entries>;

    /// Snapshot the entry for `path` itself, without following a final link.
    fn describe(&self, path: &Path) -> io::Result<Entry>;
}

/// Directory source backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

/// Iterator over one directory of the local filesystem.
pub struct FsEntries {
    inner: fs::ReadDir,
}

impl Iterator for FsEntries {
    type Item = io::Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir_entry = match self.inner.next()? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        Some(dir_entry.metadata().map(|own| {
            let target = if own.file_type().is_symlink() {
                fs::metadata(dir_entry.path()).ok()
            } else {
                None
            };
            Entry::from_metadata(name, &own, target.as_ref())
        }))
    }
}

impl DirectorySource for FsSource {
    type Entries = FsEntries;

    fn entries(&self, dir: &Path) -> io::Result<FsEntries> {
        Ok(FsEntries {
            inner: fs::read_dir(dir)?,
        })
    }

    fn describe(&self, path: &Path) -> io::Result<Entry> {
        let own = fs::symlink_metadata(path)?;
        let target = if own.file_type().is_symlink() {
            fs::metadata(path).ok()
        } else {
            None
        };
        Ok(Entry::from_metadata(display_name(path), &own, target.as_ref()))
    }
}

/// A path argument: either a directory or `parent/pattern` with wildcards
/// in the last component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    Directory(PathBuf),
    Wildcard { parent: PathBuf, pattern: String },
}

impl PathSpec {
    /// Split a path argument. Only the last component may hold wildcards.
    pub fn parse(spec: &str) -> Self {
        if !contains_wildcard(spec) {
            return PathSpec::Directory(PathBuf::from(spec));
        }

        match spec.rfind(is_separator) {
            Some(pos) => {
                // Keep a leading separator so "/*.rs" lists the root
                let parent = if pos == 0 { &spec[..1] } else { &spec[..pos] };
                PathSpec::Wildcard {
                    parent: PathBuf::from(parent),
                    pattern: spec[pos + 1..].to_string(),
                }
            }
            None => PathSpec::Wildcard {
                parent: PathBuf::from("."),
                pattern: spec.to_string(),
            },
        }
    }

    /// Directory that gets enumerated.
    pub fn directory(&self) -> &Path {
        match self {
            PathSpec::Directory(path) => path,
            PathSpec::Wildcard { parent, .. } => parent,
        }
    }

    /// Extra name pattern applied on top of the filter config.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            PathSpec::Directory(_) => None,
            PathSpec::Wildcard { pattern, .. } => Some(pattern),
        }
    }
}

/// Read the visible entries named by a path spec. No ordering is applied.
pub fn read_directory<S: DirectorySource>(
    source: &S,
    spec: &PathSpec,
    filter: &FilterConfig,
) -> Result<Vec<Entry>, ListError> {
    read_filtered(source, spec.directory(), spec.pattern(), filter)
}

/// Read the visible entries of `dir`, applying an optional extra pattern.
pub(crate) fn read_filtered<S: DirectorySource>(
    source: &S,
    dir: &Path,
    pattern: Option<&str>,
    filter: &FilterConfig,
) -> Result<Vec<Entry>, ListError> {
    let start = Instant::now();

    let iter = source
        .entries(dir)
        .map_err(|e| ListError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;

    let mut entry_filter = EntryFilter::new(filter);
    if let Some(p) = pattern {
        entry_filter = entry_filter.with_pattern(p);
    }

    let mut entries = Vec::new();
    for item in iter {
        let entry = match item {
            Ok(e) => e,
            Err(e) => {
                log::debug!("read_directory: skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.name == "." || entry.name == ".." {
            continue;
        }
        if entry_filter.visible(&entry) {
            entries.push(entry);
        }
    }

    log::debug!(
        "read_directory: path={}, entries={}, elapsed={}ms",
        dir.display(),
        entries.len(),
        start.elapsed().as_millis()
    );

    Ok(entries)
}

/// Snapshot a path itself rather than its contents.
pub fn describe_path<S: DirectorySource>(source: &S, path: &Path) -> Result<Entry, ListError> {
    source
        .describe(path)
        .map_err(|e| ListError::PathUnavailable {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Get the name of a path, defaulting to the full path for roots like "/" or ".".
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
