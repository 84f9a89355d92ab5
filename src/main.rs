//! CLI entry point for lk

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use lk::{
    DirectoryListing, Entry, FilterConfig, FlatFormatter, FsSource, JsonCollector, ListError,
    ListingConfig, ListingOutput, ListingWalker, OutputConfig, PathSpec, SortConfig, SortKey,
    TraversalConfig, TreeEvent, TreeFormatter, TreeOutput, TreeWalker, WalkReport, aggregate,
    describe_path, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lk")]
#[command(about = "List directory contents with sorting, filtering and tree views")]
#[command(version)]
struct Args {
    /// Directories to list; the last component may contain * and ? wildcards
    #[arg(default_value = ".")]
    paths: Vec<String>,

    /// Show hidden files
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Use long listing format (attributes, size, dates)
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Recursively list subdirectories
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Sort by file size
    #[arg(short = 'S')]
    sort_size: bool,

    /// Sort by modification time
    #[arg(short = 't')]
    sort_time: bool,

    /// Sort by file extension
    #[arg(short = 'X')]
    sort_extension: bool,

    /// Reverse sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Use human-readable file sizes
    #[arg(short = 'H', long = "human-readable")]
    human: bool,

    /// Append file type indicator (/ directory, @ link, * executable)
    #[arg(short = 'F', long = "classify")]
    classify: bool,

    /// List the path itself, not its contents
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Group directories before files
    #[arg(short = 'G', long = "group-directories-first")]
    group_dirs: bool,

    /// Show file creation time (long format)
    #[arg(short = 'E', long = "created")]
    created: bool,

    /// Tree view of directory structure
    #[arg(short = 'T', long = "tree")]
    tree: bool,

    /// Natural sorting (numbers compared by value)
    #[arg(short = 'N', long = "natural")]
    natural: bool,

    /// Show full path after each name
    #[arg(short = 'P', long = "full-path")]
    full_path: bool,

    /// Display file owner (long format)
    #[arg(short = 'O', long = "owner")]
    owner: bool,

    /// Show summary (directories, files, total size)
    #[arg(short = 'M', long = "summary")]
    summary: bool,

    /// Descend only N levels deep (root is level 1, at most 31)
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only show entries whose name matches pattern
    #[arg(long = "filter", value_name = "PATTERN")]
    filter: Option<String>,

    /// Only show files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only show files modified longer than DURATION ago
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log each directory read to stderr
    #[arg(long = "verbose")]
    verbose: bool,
}

/// Which walk a root gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Tree,
    Describe,
}

impl Mode {
    fn from_args(args: &Args) -> Self {
        if args.directory {
            Mode::Describe
        } else if args.tree {
            Mode::Tree
        } else {
            Mode::Flat
        }
    }
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Turn a `--newer`/`--older` argument into a cutoff time, exiting on bad input.
fn cutoff(flag: &str, value: Option<&String>) -> Option<SystemTime> {
    value.map(|s| {
        let duration = parse_duration_string(s).unwrap_or_else(|e| {
            eprintln!("lk: invalid --{} duration '{}': {}", flag, s, e);
            process::exit(1);
        });
        SystemTime::now()
            .checked_sub(duration)
            .unwrap_or(SystemTime::UNIX_EPOCH)
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Warn => "warning".to_string(),
                other => other.as_str().to_lowercase(),
            };
            writeln!(buf, "lk: {}: {}", level, record.args())
        })
        .init();
}

fn listing_config(args: &Args) -> ListingConfig {
    ListingConfig {
        filter: FilterConfig {
            show_hidden: args.all,
            name_pattern: args.filter.clone(),
            ignore_patterns: args.ignore.clone(),
            newer_than: cutoff("newer", args.newer.as_ref()),
            older_than: cutoff("older", args.older.as_ref()),
        },
        sort: SortConfig {
            group_directories_first: args.group_dirs,
            key: SortKey::from_flags(args.sort_time, args.sort_size, args.sort_extension),
            natural: args.natural,
            reverse: args.reverse,
        },
        traversal: TraversalConfig {
            recursive: args.recursive,
            tree_mode: args.tree,
            max_depth: args.level,
            summarize: args.summary,
        },
    }
}

fn output_config(args: &Args) -> OutputConfig {
    OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        long_format: args.long,
        human_sizes: args.human,
        show_created: args.created,
        show_owner: args.owner,
        classify: args.classify,
        full_path: args.full_path,
        show_summary: args.summary,
    }
}

/// Show a path itself as a one-row listing.
fn describe_root<O: ListingOutput>(root: &str, out: &mut O) -> Result<WalkReport, ListError> {
    let path = Path::new(root);
    let entry = describe_path(&FsSource, path)?;
    out.output_described(path, &entry)?;
    Ok(WalkReport {
        totals: aggregate(std::slice::from_ref(&entry)),
        ..Default::default()
    })
}

/// Split a root's outcome: output failures abort the run, anything else is
/// reported and leaves the remaining roots to be listed.
fn settle(result: Result<WalkReport, ListError>) -> io::Result<Result<WalkReport, ListError>> {
    match result {
        Err(ListError::Output(e)) => Err(e),
        Err(e) => {
            eprintln!("lk: {}", e);
            Ok(Err(e))
        }
        Ok(report) => {
            if report.depth_limited > 0 {
                log::debug!("{} directories not entered (depth limit)", report.depth_limited);
            }
            Ok(Ok(report))
        }
    }
}

/// Output that can take both walk shapes, so one driver serves every mode.
trait RootOutput: ListingOutput + TreeOutput {
    fn begin_root(&mut self, root: &str, index: usize, multiple: bool) -> io::Result<()>;
    fn end_root(&mut self, result: &Result<WalkReport, ListError>) -> io::Result<()>;
}

impl RootOutput for JsonCollector {
    fn begin_root(&mut self, root: &str, _index: usize, _multiple: bool) -> io::Result<()> {
        JsonCollector::begin_root(self, root);
        Ok(())
    }

    fn end_root(&mut self, result: &Result<WalkReport, ListError>) -> io::Result<()> {
        match result {
            Ok(report) => self.finish_root(report),
            Err(e) => self.fail_root(e),
        }
        Ok(())
    }
}

/// Console output: flat blocks and tree lines share stdout.
struct Console {
    mode: Mode,
    flat: FlatFormatter,
    tree: TreeFormatter,
}

impl ListingOutput for Console {
    fn output_directory(&mut self, listing: &DirectoryListing<'_>) -> io::Result<()> {
        self.flat.output_directory(listing)
    }

    fn output_described(&mut self, path: &Path, entry: &Entry) -> io::Result<()> {
        self.flat.output_described(path, entry)
    }
}

impl TreeOutput for Console {
    fn output_event(&mut self, event: &TreeEvent<'_>) -> io::Result<()> {
        self.tree.output_event(event)
    }
}

impl RootOutput for Console {
    fn begin_root(&mut self, root: &str, index: usize, multiple: bool) -> io::Result<()> {
        if multiple {
            self.flat.root_banner(root, index == 0)?;
        }
        if self.mode == Mode::Tree {
            self.tree.begin(root)?;
        }
        Ok(())
    }

    fn end_root(&mut self, result: &Result<WalkReport, ListError>) -> io::Result<()> {
        match result {
            Ok(report) if self.mode == Mode::Tree => self.tree.finish(&report.totals),
            _ => Ok(()),
        }
    }
}

/// List every root in order. Returns whether all of them could be listed.
fn run<O: RootOutput>(args: &Args, config: ListingConfig, out: &mut O) -> io::Result<bool> {
    let mode = Mode::from_args(args);
    let multiple = args.paths.len() > 1;
    let flat = ListingWalker::new(config.clone());
    let tree = TreeWalker::new(config);
    let mut all_listed = true;

    for (index, root) in args.paths.iter().enumerate() {
        out.begin_root(root, index, multiple)?;

        let result = match mode {
            Mode::Describe => describe_root(root, out),
            Mode::Tree => tree.walk(&PathSpec::parse(root), out),
            Mode::Flat => flat.walk(&PathSpec::parse(root), out),
        };

        let result = settle(result)?;
        all_listed &= result.is_ok();
        out.end_root(&result)?;
    }

    Ok(all_listed)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = listing_config(&args);
    let output = output_config(&args);

    let result = if args.json {
        let mut collector = JsonCollector::new(args.summary);
        run(&args, config, &mut collector)
            .and_then(|ok| print_json(&collector.into_document()).map(|()| ok))
    } else {
        let mut console = Console {
            mode: Mode::from_args(&args),
            flat: FlatFormatter::stdout(output.clone()),
            tree: TreeFormatter::stdout(output),
        };
        run(&args, config, &mut console)
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            // Quietly stop when the reader went away (e.g. piped into head)
            if e.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            eprintln!("lk: error writing output: {}", e);
            process::exit(1);
        }
    }
}
