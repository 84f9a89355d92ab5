//! Console formatter for flat listings
//!
//! Writes each directory block as a `[path]:` header, an optional long-format
//! column header, numbered rows and an optional summary line.

use std::io;
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::Entry;
use crate::listing::{DirectoryListing, ListingOutput, Summary};

use super::config::OutputConfig;
use super::format::{format_size, long_columns, long_header, name_color, type_indicator};

/// Streams flat listing blocks to a color-capable writer.
pub struct FlatFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl FlatFormatter<StandardStream> {
    /// Formatter writing to stdout, colored only if the config asks for it.
    pub fn stdout(config: OutputConfig) -> Self {
        // Color detection already happened when building the config
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> FlatFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Banner printed before each root when several are listed.
    pub fn root_banner(&mut self, path: &str, first: bool) -> io::Result<()> {
        if !first {
            writeln!(self.out)?;
        }
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "==> {} <==", path)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "[{}]:", path.display())?;
        self.out.reset()?;
        writeln!(self.out)?;

        if self.config.long_format {
            let (header, rule) = long_header(&self.config);
            writeln!(self.out, "{}", header)?;
            writeln!(self.out, "{}", rule)?;
        }
        Ok(())
    }

    fn write_row(&mut self, index: usize, dir: &Path, entry: &Entry) -> io::Result<()> {
        write!(self.out, "{:>3}. ", index)?;

        let full_path = dir.join(&entry.name);
        if self.config.long_format {
            let columns = long_columns(entry, &full_path, &self.config);
            write!(self.out, "{}", columns)?;
        }

        match name_color(entry) {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", entry.name)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", entry.name)?,
        }

        if self.config.classify {
            write!(self.out, "{}", type_indicator(entry))?;
        }
        if self.config.full_path {
            write!(self.out, " ({})", full_path.display())?;
        }
        writeln!(self.out)
    }

    fn write_summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Summary: {} directories, {} files, total size: {}",
            summary.directories,
            summary.files,
            format_size(summary.total_bytes, self.config.human_sizes)
        )
    }
}

impl<W: WriteColor> ListingOutput for FlatFormatter<W> {
    fn output_directory(&mut self, listing: &DirectoryListing<'_>) -> io::Result<()> {
        self.write_header(listing.path)?;
        for (i, entry) in listing.entries.iter().enumerate() {
            self.write_row(i + 1, listing.path, entry)?;
        }
        if let Some(summary) = &listing.summary {
            self.write_summary(summary)?;
        }
        self.out.flush()
    }

    fn output_described(&mut self, path: &Path, entry: &Entry) -> io::Result<()> {
        self.write_header(path)?;
        let parent = path.parent().unwrap_or(Path::new(""));
        self.write_row(1, parent, entry)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::NoColor;

    use super::*;
    use crate::listing::aggregate;

    fn render(config: OutputConfig, path: &str, entries: &[Entry], summarize: bool) -> String {
        let mut formatter = FlatFormatter::new(config, NoColor::new(Vec::new()));
        let path = PathBuf::from(path);
        formatter
            .output_directory(&DirectoryListing {
                path: &path,
                depth: 0,
                entries,
                summary: summarize.then(|| aggregate(entries)),
            })
            .unwrap();
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_header_and_numbered_rows() {
        let entries = [Entry::dir("sub"), Entry::file("a.txt", 20), Entry::file("b.txt", 10)];
        let output = render(OutputConfig::default(), "proj", &entries, false);
        assert_eq!(output, "\n[proj]:\n  1. sub\n  2. a.txt\n  3. b.txt\n");
    }

    #[test]
    fn test_classify_and_full_path() {
        let entries = [
            Entry::dir("sub"),
            Entry::link("up", true),
            Entry::file("run.bat", 1),
        ];
        let config = OutputConfig {
            classify: true,
            full_path: true,
            ..Default::default()
        };
        let output = render(config, "proj", &entries, false);
        let sub = PathBuf::from("proj").join("sub");
        assert!(output.contains(&format!("  1. sub/ ({})", sub.display())));
        assert!(output.contains("  2. up@ ("));
        assert!(output.contains("  3. run.bat* ("));
    }

    #[test]
    fn test_summary_line() {
        let entries = [Entry::file("a", 100), Entry::file("b", 250), Entry::dir("sub")];
        let output = render(OutputConfig::default(), "d", &entries, true);
        assert!(output.ends_with("\nSummary: 1 directories, 2 files, total size: 350\n"));
    }

    #[test]
    fn test_summary_line_human_sizes() {
        let entries = [Entry::file("big", 3 * 1024 * 1024)];
        let config = OutputConfig {
            human_sizes: true,
            ..Default::default()
        };
        let output = render(config, "d", &entries, true);
        assert!(output.contains("total size: 3.0M"));
    }

    #[test]
    fn test_long_format_columns() {
        let entries = [Entry::dir("sub"), Entry::file("a.txt", 1536)];
        let config = OutputConfig {
            long_format: true,
            human_sizes: true,
            ..Default::default()
        };
        let output = render(config, "d", &entries, false);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[2].contains("Attr"));
        assert!(lines[3].trim().starts_with("---"));
        assert!(lines[4].contains("d----"));
        assert!(lines[4].contains("<DIR>"));
        assert!(lines[5].contains("1.5K"));
        assert!(lines[5].ends_with("a.txt"));
    }

    #[test]
    fn test_empty_directory_has_header_only() {
        let output = render(OutputConfig::default(), "empty", &[], false);
        assert_eq!(output, "\n[empty]:\n");
    }

    #[test]
    fn test_described_path_is_single_row() {
        let mut formatter = FlatFormatter::new(
            OutputConfig {
                full_path: true,
                ..Default::default()
            },
            NoColor::new(Vec::new()),
        );
        let path = PathBuf::from("proj").join("notes.txt");
        formatter
            .output_described(&path, &Entry::file("notes.txt", 5))
            .unwrap();
        let output = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(
            output,
            format!("\n[{0}]:\n  1. notes.txt ({0})\n", path.display())
        );
    }

    #[test]
    fn test_root_banner() {
        let mut formatter = FlatFormatter::new(OutputConfig::default(), NoColor::new(Vec::new()));
        formatter.root_banner("a", true).unwrap();
        formatter.root_banner("b", false).unwrap();
        let output = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(output, "==> a <==\n\n==> b <==\n");
    }
}
