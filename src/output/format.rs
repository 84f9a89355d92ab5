//! Formatting helpers for sizes, times, attributes and owners

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use termcolor::{Color, ColorSpec};

use crate::entry::Entry;

use super::config::OutputConfig;

/// Extensions shown as executables.
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "dll", "bin", "com", "bat", "cmd"];

/// Format a size in bytes, either raw or in 1024-based units.
pub fn format_size(bytes: u64, human: bool) -> String {
    const SUFFIXES: [&str; 6] = ["B", "K", "M", "G", "T", "P"];

    if !human {
        return bytes.to_string();
    }
    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SUFFIXES.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, SUFFIXES[unit])
}

/// Format a timestamp as local `YYYY-MM-DD HH:MM:SS`.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Five-character attribute string: kind, then read-only, hidden, system
/// and archive flags (or `-`).
pub fn format_attributes(entry: &Entry) -> String {
    let kind = if entry.is_link {
        'l'
    } else if entry.is_dir {
        'd'
    } else {
        '-'
    };
    let flags = AttributeFlags::from_raw(entry.attributes);

    [
        kind,
        if flags.readonly { 'R' } else { '-' },
        if entry.hidden { 'H' } else { '-' },
        if flags.system { 'S' } else { '-' },
        if flags.archive { 'A' } else { '-' },
    ]
    .iter()
    .collect()
}

#[derive(Debug, Default)]
struct AttributeFlags {
    readonly: bool,
    system: bool,
    archive: bool,
}

impl AttributeFlags {
    #[cfg(windows)]
    fn from_raw(raw: u32) -> Self {
        Self {
            readonly: raw & 0x1 != 0,
            system: raw & 0x4 != 0,
            archive: raw & 0x20 != 0,
        }
    }

    #[cfg(not(windows))]
    fn from_raw(raw: u32) -> Self {
        Self {
            // No write bit for anyone
            readonly: raw != 0 && raw & 0o222 == 0,
            ..Default::default()
        }
    }
}

/// Check if a name has one of the executable extensions.
pub fn is_executable_name(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        EXECUTABLE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
    })
}

/// Suffix marking the entry type: `/` directory, `@` link, `*` executable.
pub fn type_indicator(entry: &Entry) -> &'static str {
    if entry.is_link {
        "@"
    } else if entry.is_dir {
        "/"
    } else if is_executable_name(&entry.name) {
        "*"
    } else {
        ""
    }
}

/// Color for an entry name, if it gets one.
pub fn name_color(entry: &Entry) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    if entry.is_link {
        spec.set_fg(Some(Color::Magenta)).set_intense(true);
    } else if entry.is_dir {
        spec.set_fg(Some(Color::Cyan)).set_intense(true).set_bold(true);
    } else if is_executable_name(&entry.name) {
        spec.set_fg(Some(Color::Green)).set_intense(true);
    } else {
        return None;
    }
    Some(spec)
}

/// Owner of a path as a display string.
#[cfg(unix)]
pub fn owner_of(path: &Path) -> Option<String> {
    use std::os::unix::fs::MetadataExt;
    let meta = std::fs::symlink_metadata(path).ok()?;
    Some(format!("{}:{}", meta.uid(), meta.gid()))
}

#[cfg(not(unix))]
pub fn owner_of(_path: &Path) -> Option<String> {
    None
}

/// Column header and rule line for long format.
pub fn long_header(config: &OutputConfig) -> (String, String) {
    let mut header = format!("     {:<6} {:>12} ", "Attr", "Size");
    if config.show_created {
        header.push_str(&format!("{:>20} ", "Created"));
    }
    header.push_str(&format!("{:>20} ", "Modified"));
    if config.show_owner {
        header.push_str(&format!("{:<20} ", "Owner"));
    }
    header.push_str("Name");

    let rule = format!("     {}", "-".repeat(header.trim_start().len()));
    (header, rule)
}

/// Long-format columns for one entry, up to (not including) the name.
pub fn long_columns(entry: &Entry, path: &Path, config: &OutputConfig) -> String {
    let size = if entry.is_dir {
        "<DIR>".to_string()
    } else {
        format_size(entry.size, config.human_sizes)
    };

    let mut columns = format!("{:<6} {:>12} ", format_attributes(entry), size);
    if config.show_created {
        let created = entry.created.map(format_time).unwrap_or_else(|| "-".to_string());
        columns.push_str(&format!("{:>20} ", created));
    }
    columns.push_str(&format!("{:>20} ", format_time(entry.modified)));
    if config.show_owner {
        let owner = owner_of(path).unwrap_or_else(|| "Unknown".to_string());
        columns.push_str(&format!("{:<20} ", owner));
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_raw() {
        assert_eq!(format_size(0, false), "0");
        assert_eq!(format_size(123456, false), "123456");
    }

    #[test]
    fn test_format_size_human() {
        assert_eq!(format_size(350, true), "350B");
        assert_eq!(format_size(1024, true), "1.0K");
        assert_eq!(format_size(1536, true), "1.5K");
        assert_eq!(format_size(5 * 1024 * 1024, true), "5.0M");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024, true), "3.0G");
        assert_eq!(format_size(u64::MAX, true), "16384.0P");
    }

    #[test]
    fn test_format_time_shape() {
        let formatted = format_time(SystemTime::now());
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(format_attributes(&Entry::dir("src")), "d----");
        assert_eq!(format_attributes(&Entry::link("up", true)), "l----");
        assert_eq!(format_attributes(&Entry::file(".env", 1)), "--H--");
    }

    #[test]
    #[cfg(unix)]
    fn test_readonly_attribute_from_mode() {
        let mut entry = Entry::file("locked", 1);
        entry.attributes = 0o100444;
        assert_eq!(format_attributes(&entry), "-R---");
        entry.attributes = 0o100644;
        assert_eq!(format_attributes(&entry), "-----");
    }

    #[test]
    fn test_type_indicator() {
        assert_eq!(type_indicator(&Entry::dir("src")), "/");
        assert_eq!(type_indicator(&Entry::link("l", false)), "@");
        assert_eq!(type_indicator(&Entry::file("setup.EXE", 1)), "*");
        assert_eq!(type_indicator(&Entry::file("notes.txt", 1)), "");
        assert_eq!(type_indicator(&Entry::file("exe", 1)), "");
    }

    #[test]
    fn test_long_header_columns() {
        let config = OutputConfig {
            show_created: true,
            show_owner: true,
            ..Default::default()
        };
        let (header, rule) = long_header(&config);
        assert!(header.contains("Created"));
        assert!(header.contains("Owner"));
        assert!(header.ends_with("Name"));
        assert!(rule.trim_start().chars().all(|c| c == '-'));
    }
}
