//! JSON output formatting
//!
//! JSON needs the whole invocation in memory, so instead of streaming this
//! collects every walk into a [`JsonDocument`] and prints it once at the end.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::{Entry, TypeTag};
use crate::error::ListError;
use crate::listing::{DirectoryListing, ListingOutput, Summary, TreeEvent, TreeOutput, WalkReport};

/// Serializable entry.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub name: String,
    pub kind: TypeTag,
    pub size: u64,
    pub hidden: bool,
    pub modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<&Entry> for JsonEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.type_tag(),
            size: entry.size,
            hidden: entry.hidden,
            modified: entry.modified.into(),
            created: entry.created.map(Into::into),
        }
    }
}

/// One flat directory block.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDirectory {
    pub path: PathBuf,
    /// 0 for the root of the walk
    pub depth: usize,
    pub entries: Vec<JsonEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

/// One tree walk step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum JsonEvent {
    Entry {
        depth: usize,
        #[serde(flatten)]
        entry: JsonEntry,
    },
    Descend {
        depth: usize,
        path: PathBuf,
    },
}

/// Everything listed under one root argument.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JsonRoot {
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<JsonDirectory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<JsonEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Summary>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JsonDocument {
    pub roots: Vec<JsonRoot>,
}

/// Collects flat or tree output for every root into one document.
#[derive(Debug, Default)]
pub struct JsonCollector {
    document: JsonDocument,
    with_totals: bool,
}

impl JsonCollector {
    /// `with_totals` adds each root's accumulated summary to its record.
    pub fn new(with_totals: bool) -> Self {
        Self {
            document: JsonDocument::default(),
            with_totals,
        }
    }

    /// Start recording a new root.
    pub fn begin_root(&mut self, path: &str) {
        self.document.roots.push(JsonRoot {
            path: path.to_string(),
            ..Default::default()
        });
    }

    /// Record what a finished walk skipped, and its totals when enabled.
    pub fn finish_root(&mut self, report: &WalkReport) {
        let with_totals = self.with_totals;
        let root = self.current();
        root.errors.extend(report.skipped.iter().map(ToString::to_string));
        if with_totals {
            root.totals = Some(report.totals);
        }
    }

    /// Record a root that could not be listed at all.
    pub fn fail_root(&mut self, error: &ListError) {
        self.current().errors.push(error.to_string());
    }

    pub fn into_document(self) -> JsonDocument {
        self.document
    }

    fn current(&mut self) -> &mut JsonRoot {
        if self.document.roots.is_empty() {
            self.document.roots.push(JsonRoot::default());
        }
        let last = self.document.roots.len() - 1;
        &mut self.document.roots[last]
    }
}

impl ListingOutput for JsonCollector {
    fn output_directory(&mut self, listing: &DirectoryListing<'_>) -> io::Result<()> {
        self.current().directories.push(JsonDirectory {
            path: listing.path.to_path_buf(),
            depth: listing.depth,
            entries: listing.entries.iter().map(JsonEntry::from).collect(),
            summary: listing.summary,
        });
        Ok(())
    }
}

impl TreeOutput for JsonCollector {
    fn output_event(&mut self, event: &TreeEvent<'_>) -> io::Result<()> {
        let event = match event {
            TreeEvent::Entry { depth, entry, .. } => JsonEvent::Entry {
                depth: *depth,
                entry: JsonEntry::from(*entry),
            },
            TreeEvent::Descend { depth, path } => JsonEvent::Descend {
                depth: *depth,
                path: path.to_path_buf(),
            },
        };
        self.current().events.push(event);
        Ok(())
    }
}

/// Print a document as pretty-printed JSON to stdout.
pub fn print_json(document: &JsonDocument) -> io::Result<()> {
    let json = serde_json::to_string_pretty(document).map_err(io::Error::other)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", json)?;
    out.flush()
}
