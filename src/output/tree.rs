//! Console formatter for tree walks

use std::io;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::Entry;
use crate::listing::{Summary, TreeEvent, TreeOutput, indent_for};

use super::config::OutputConfig;
use super::format::{format_size, name_color, type_indicator};

/// Streams tree events as `|- [D] name` lines to a color-capable writer.
pub struct TreeFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
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

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the root header before the first event.
    pub fn begin(&mut self, root: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "[{}]:", root)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Print the closing totals line, if summaries are enabled.
    pub fn finish(&mut self, totals: &Summary) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Summary: {} directories, {} files, total size: {}",
                totals.directories,
                totals.files,
                format_size(totals.total_bytes, self.config.human_sizes)
            )?;
        }
        self.out.flush()
    }

    fn write_entry(&mut self, depth: usize, marker: &str, entry: &Entry) -> io::Result<()> {
        write!(self.out, "{}|- {} ", indent_for(depth), marker)?;
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
        writeln!(self.out)
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn output_event(&mut self, event: &TreeEvent<'_>) -> io::Result<()> {
        match event {
            TreeEvent::Entry { depth, tag, entry } => self.write_entry(*depth, tag.marker(), entry),
            TreeEvent::Descend { depth, path } => {
                write!(self.out, "{}|", indent_for(*depth))?;
                if self.config.full_path {
                    write!(self.out, " ({})", path.display())?;
                }
                writeln!(self.out)
            }
        }
    }
}
