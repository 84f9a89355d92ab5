//! Walk results

use crate::error::ListError;

use super::summary::Summary;

/// What a completed walk saw, beyond what it emitted.
#[derive(Debug, Default)]
pub struct WalkReport {
    /// Directory levels whose entries were emitted.
    pub directories_listed: usize,
    /// Sum of every emitted level's summary.
    pub totals: Summary,
    /// Subdirectories that could not be read, in encounter order.
    pub skipped: Vec<ListError>,
    /// Directories listed but not entered because of the depth limit.
    pub depth_limited: usize,
}

