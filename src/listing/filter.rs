//! Entry visibility

use crate::entry::Entry;
use crate::pattern::matches;

use super::config::FilterConfig;

/// Decides whether an entry is kept during enumeration.
///
/// An optional extra pattern (from a wildcard path spec) applies on top of
/// the configured name pattern.
pub struct EntryFilter<'a> {
    config: &'a FilterConfig,
    extra_pattern: Option<&'a str>,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            extra_pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: &'a str) -> Self {
        self.extra_pattern = Some(pattern).filter(|p| !p.is_empty());
        self
    }

    /// Check if an entry should be kept.
    pub fn visible(&self, entry: &Entry) -> bool {
        if entry.hidden && !self.config.show_hidden {
            return false;
        }

        if let Some(pattern) = self.config.active_pattern() {
            if !matches(pattern, &entry.name) {
                return false;
            }
        }

        if let Some(pattern) = self.extra_pattern {
            if !matches(pattern, &entry.name) {
                return false;
            }
        }

        if self
            .config
            .ignore_patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && matches(pattern, &entry.name))
        {
            return false;
        }

        entry.is_dir || self.passes_time_filter(entry)
    }

    fn passes_time_filter(&self, entry: &Entry) -> bool {
        if let Some(newer) = self.config.newer_than {
            if entry.modified < newer {
                return false;
            }
        }
        if let Some(older) = self.config.older_than {
            if entry.modified > older {
                return false;
            }
        }
        true
    }
}

/// Convenience form of [`EntryFilter::visible`].
pub fn visible(entry: &Entry, config: &FilterConfig) -> bool {
    EntryFilter::new(config).visible(entry)
}
