//! Multi-key entry ordering
//!
//! Evaluation order, first non-equal decision wins:
//!
//! 1. directories first (only when grouping, never reversed)
//! 2. the primary key: time, size or extension
//! 3. the name, naturally or case-insensitively
//! 4. the name byte-for-byte, so the order never depends on read order
//!
//! `reverse` flips the decision from steps 2-4 only.

use std::cmp::Ordering;

use crate::entry::Entry;

use super::config::{SortConfig, SortKey};
use super::natural::{compare_ignore_case, natural_compare};

/// Total order over entries for the given sort configuration.
pub fn compare_entries(a: &Entry, b: &Entry, config: &SortConfig) -> Ordering {
    if config.group_directories_first && a.is_dir != b.is_dir {
        return if a.is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let ord = compare_by_key(a, b, config.key).then_with(|| compare_names(a, b, config.natural));

    if config.reverse { ord.reverse() } else { ord }
}

/// Sort an entry list in place.
pub fn sort_entries(entries: &mut [Entry], config: &SortConfig) {
    entries.sort_by(|a, b| compare_entries(a, b, config));
}

fn compare_by_key(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => Ordering::Equal,
        SortKey::Time => a.modified.cmp(&b.modified),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Extension => match (a.extension(), b.extension()) {
            (Some(ea), Some(eb)) => compare_ignore_case(ea, eb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

fn compare_names(a: &Entry, b: &Entry, natural: bool) -> Ordering {
    let folded = if natural {
        natural_compare(&a.name, &b.name)
    } else {
        compare_ignore_case(&a.name, &b.name)
    };
    folded.then_with(|| a.name.cmp(&b.name))
}
