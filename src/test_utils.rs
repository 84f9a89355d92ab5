//! Test utilities for temporary directories and synthetic listings.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use tempfile::TempDir;

use crate::entry::Entry;
use crate::listing::DirectorySource;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing to `target`, both relative to the
    /// temporary directory.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(self.dir.path().join(target), &link_path)
            .expect("Failed to create symlink");
        link_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory directory source.
///
/// Directories are keyed by path; a link entry's target is whatever
/// directory is registered under the link's own path, if any. That makes
/// cycles easy to describe without a real filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dirs: HashMap<PathBuf, Vec<Entry>>,
    unreadable: HashSet<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entries of a directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>, entries: Vec<Entry>) -> Self {
        self.dirs.insert(path.as_ref().to_path_buf(), entries);
        self
    }

    /// Make reading a directory fail with permission denied.
    pub fn with_unreadable(mut self, path: impl AsRef<Path>) -> Self {
        self.unreadable.insert(path.as_ref().to_path_buf());
        self
    }
}

impl DirectorySource for MemorySource {
    type Entries = vec::IntoIter<io::Result<Entry>>;

    fn entries(&self, dir: &Path) -> io::Result<Self::Entries> {
        if self.unreadable.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let entries = self
            .dirs
            .get(dir)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))?;
        Ok(entries.iter().cloned().map(Ok).collect::<Vec<_>>().into_iter())
    }

    fn describe(&self, path: &Path) -> io::Result<Entry> {
        let parent = path.parent().unwrap_or(Path::new(""));
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        self.dirs
            .get(parent)
            .and_then(|entries| entries.iter().find(|e| e.name == name))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such entry"))
    }
}
