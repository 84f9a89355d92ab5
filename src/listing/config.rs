//! Configuration types for listing walks

use std::time::SystemTime;

use crate::sort::SortConfig;

/// Hard ceiling on directory levels, whatever the caller asks for.
pub const MAX_DEPTH_CEILING: usize = 31;

/// Which entries are visible.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub show_hidden: bool,
    /// Wildcard the name must match. `None` or empty means unrestricted.
    pub name_pattern: Option<String>,
    /// Entries whose name matches any of these wildcards are dropped.
    pub ignore_patterns: Vec<String>,
    /// Only include files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include files modified before this time
    pub older_than: Option<SystemTime>,
}

impl FilterConfig {
    /// The name pattern, if it restricts anything.
    pub fn active_pattern(&self) -> Option<&str> {
        self.name_pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// How far and in which shape a walk proceeds.
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    pub recursive: bool,
    pub tree_mode: bool,
    /// Number of directory levels whose contents are emitted (root = 1).
    /// Clamped to `1..=MAX_DEPTH_CEILING`; `None` means the ceiling.
    pub max_depth: Option<usize>,
    /// Compute a per-level summary in flat mode.
    pub summarize: bool,
}

impl TraversalConfig {
    /// Effective number of levels after clamping.
    pub fn depth_limit(&self) -> usize {
        self.max_depth
            .unwrap_or(MAX_DEPTH_CEILING)
            .clamp(1, MAX_DEPTH_CEILING)
    }

    /// Check if a directory at `depth` (root = 0) may have its children listed.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.recursive && depth + 1 < self.depth_limit()
    }
}

/// Everything a walk needs, threaded explicitly through each call.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    pub filter: FilterConfig,
    pub sort: SortConfig,
    pub traversal: TraversalConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_is_clamped() {
        let mut config = TraversalConfig::default();
        assert_eq!(config.depth_limit(), MAX_DEPTH_CEILING);

        config.max_depth = Some(1000);
        assert_eq!(config.depth_limit(), MAX_DEPTH_CEILING);

        config.max_depth = Some(0);
        assert_eq!(config.depth_limit(), 1);

        config.max_depth = Some(3);
        assert_eq!(config.depth_limit(), 3);
    }

    #[test]
    fn test_may_descend_requires_recursion() {
        let mut config = TraversalConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        assert!(!config.may_descend(0));

        config.recursive = true;
        assert!(config.may_descend(0));
        assert!(!config.may_descend(1));
    }

    #[test]
    fn test_empty_pattern_is_inactive() {
        let mut filter = FilterConfig {
            name_pattern: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.active_pattern(), None);

        filter.name_pattern = Some("*.rs".to_string());
        assert_eq!(filter.active_pattern(), Some("*.rs"));
    }
}
