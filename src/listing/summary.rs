//! Per-directory counts and sizes

use serde::Serialize;

use crate::entry::Entry;

/// Aggregate counts for one entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub directories: u64,
    pub files: u64,
    /// Sum of non-directory sizes
    pub total_bytes: u64,
}

impl Summary {
    /// Add another summary into this one.
    pub fn combine(&mut self, other: &Summary) {
        self.directories += other.directories;
        self.files += other.files;
        self.total_bytes = self.total_bytes.saturating_add(other.total_bytes);
    }
}

/// Count directories and files and total the file sizes in one pass.
pub fn aggregate(entries: &[Entry]) -> Summary {
    let mut summary = Summary::default();
    for entry in entries {
        if entry.is_dir {
            summary.directories += 1;
        } else {
            summary.files += 1;
            summary.total_bytes = summary.total_bytes.saturating_add(entry.size);
        }
    }
    summary
}
