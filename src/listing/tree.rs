//! Tree walker - indented outline of a directory and its subdirectories

use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{Entry, TypeTag};
use crate::error::ListError;
use crate::sort::sort_entries;

use super::config::ListingConfig;
use super::reader::{DirectorySource, FsSource, PathSpec, read_filtered};
use super::report::WalkReport;
use super::summary::aggregate;

/// Characters of indentation per directory level.
pub const INDENT_WIDTH: usize = 2;

/// Indentation for a given depth. Depends on nothing else.
pub fn indent_for(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}

/// One step of a tree walk, in pre-order.
#[derive(Debug)]
pub enum TreeEvent<'a> {
    /// An entry line at the given depth.
    Entry {
        depth: usize,
        tag: TypeTag,
        entry: &'a Entry,
    },
    /// About to list the contents of `path`, a child of a directory at `depth`.
    Descend { depth: usize, path: &'a Path },
}

/// Callback for tree output - receives each event for display.
pub trait TreeOutput {
    fn output_event(&mut self, event: &TreeEvent<'_>) -> io::Result<()>;
}

/// Walks directories like [`ListingWalker`](super::ListingWalker) but emits
/// one tagged line per entry instead of per-directory blocks.
///
/// A directory's entries are all emitted before any of its subdirectories
/// are entered. Descent only happens in recursive mode, never follows links,
/// and stops at the depth limit.
pub struct TreeWalker<S = FsSource> {
    config: ListingConfig,
    source: S,
}

impl TreeWalker<FsSource> {
    pub fn new(config: ListingConfig) -> Self {
        Self {
            config,
            source: FsSource,
        }
    }
}

impl<S: DirectorySource> TreeWalker<S> {
    /// Read directories from a different source.
    pub fn with_source<T: DirectorySource>(self, source: T) -> TreeWalker<T> {
        TreeWalker {
            config: self.config,
            source,
        }
    }

    /// Walk from a path spec. Fails only if the root cannot be read or the
    /// output cannot be written.
    pub fn walk<O: TreeOutput>(&self, spec: &PathSpec, output: &mut O) -> Result<WalkReport, ListError> {
        let mut report = WalkReport::default();
        self.walk_dir(spec.directory(), spec.pattern(), 0, output, &mut report)?;
        Ok(report)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        dir: &Path,
        pattern: Option<&str>,
        depth: usize,
        output: &mut O,
        report: &mut WalkReport,
    ) -> Result<(), ListError> {
        let mut entries = read_filtered(&self.source, dir, pattern, &self.config.filter)?;
        sort_entries(&mut entries, &self.config.sort);

        report.totals.combine(&aggregate(&entries));
        report.directories_listed += 1;

        if depth > 0 {
            output.output_event(&TreeEvent::Descend {
                depth: depth - 1,
                path: dir,
            })?;
        }

        for entry in &entries {
            output.output_event(&TreeEvent::Entry {
                depth,
                tag: entry.type_tag(),
                entry,
            })?;
        }

        let traversal = &self.config.traversal;
        if !traversal.recursive {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::config::TraversalConfig;
    use crate::test_utils::MemorySource;

    /// Renders events the way the original outline looks, for easy asserts.
    #[derive(Default)]
    struct Lines(Vec<String>);

    impl TreeOutput for Lines {
        fn output_event(&mut self, event: &TreeEvent<'_>) -> io::Result<()> {
            let line = match event {
                TreeEvent::Entry { depth, tag, entry } => {
                    format!("{}{} {}", indent_for(*depth), tag.marker(), entry.name)
                }
                TreeEvent::Descend { depth, .. } => format!("{}|", indent_for(*depth)),
            };
            self.0.push(line);
            Ok(())
        }
    }

    fn config(recursive: bool) -> ListingConfig {
        ListingConfig {
            traversal: TraversalConfig {
                recursive,
                tree_mode: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn source() -> MemorySource {
        MemorySource::new()
            .with_dir(
                "root",
                vec![
                    Entry::file("z.txt", 1),
                    Entry::dir("src"),
                    Entry::link("loop", true),
                    Entry::dir("docs"),
                ],
            )
            .with_dir("root/docs", vec![Entry::file("guide.md", 2)])
            .with_dir("root/src", vec![Entry::file("main.rs", 3), Entry::dir("bin")])
            .with_dir("root/src/bin", vec![Entry::file("tool.rs", 4)])
    }

    #[test]
    fn test_indent_is_pure_function_of_depth() {
        assert_eq!(indent_for(0), "");
        assert_eq!(indent_for(1).len(), INDENT_WIDTH);
        assert_eq!(indent_for(5).len(), 5 * INDENT_WIDTH);
    }

    #[test]
    fn test_non_recursive_tree_shows_one_level() {
        let walker = TreeWalker::new(config(false)).with_source(source());
        let mut out = Lines::default();
        walker.walk(&PathSpec::parse("root"), &mut out).unwrap();
        assert_eq!(out.0, ["[D] docs", "[L] loop", "[D] src", "[F] z.txt"]);
    }

    #[test]
    fn test_recursive_tree_outline() {
        let walker = TreeWalker::new(config(true)).with_source(source());
        let mut out = Lines::default();
        let report = walker.walk(&PathSpec::parse("root"), &mut out).unwrap();

        assert_eq!(
            out.0,
            [
                "[D] docs",
                "[L] loop",
                "[D] src",
                "[F] z.txt",
                "|",
                "  [F] guide.md",
                "|",
                "  [D] bin",
                "  [F] main.rs",
                "  |",
                "    [F] tool.rs",
            ]
        );
        assert_eq!(report.directories_listed, 4);
        assert_eq!(report.totals.files, 4);
        assert_eq!(report.totals.total_bytes, 10);
    }

    #[test]
    fn test_depth_limit_applies_to_tree() {
        let mut cfg = config(true);
        cfg.traversal.max_depth = Some(2);
        let walker = TreeWalker::new(cfg).with_source(source());
        let mut out = Lines::default();
        let report = walker.walk(&PathSpec::parse("root"), &mut out).unwrap();

        assert!(!out.0.iter().any(|l| l.contains("tool.rs")));
        assert_eq!(report.depth_limited, 1);
    }

    #[test]
    fn test_unreadable_child_is_skipped() {
        let source = MemorySource::new()
            .with_dir("root", vec![Entry::dir("a"), Entry::dir("b")])
            .with_unreadable("root/a")
            .with_dir("root/b", vec![Entry::file("x", 1)]);
        let walker = TreeWalker::new(config(true)).with_source(source);
        let mut out = Lines::default();
        let report = walker.walk(&PathSpec::parse("root"), &mut out).unwrap();

        assert_eq!(out.0, ["[D] a", "[D] b", "|", "  [F] x"]);
        assert_eq!(report.skipped.len(), 1);
    }
}
