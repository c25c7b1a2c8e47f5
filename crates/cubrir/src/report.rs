//! Coverage Aggregation
//!
//! Folds the region sequence produced by [`CoverProfile`] into per-file
//! and global statement totals. Files are tracked in an explicit map
//! keyed by path plus an ordered key list, so first-seen order is a
//! stated property of the report rather than an accident of the map
//! implementation. Chart rows follow that order.

use crate::profile::{CoverProfile, CoverageRegion};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Covered/total statement counters for one source file
///
/// The global totals reuse this shape; in both cases
/// `covered_statements <= total_statements` holds and counters never
/// decrease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Statements reported for this file
    pub total_statements: u64,
    /// Statements reported as executed
    pub covered_statements: u64,
}

impl FileStat {
    /// Coverage percentage, or `None` when no statements were reported
    ///
    /// The `None` case is the division-by-zero condition; callers decide
    /// whether it is fatal (global totals) or skippable (a single file).
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        if self.total_statements == 0 {
            return None;
        }
        Some(self.covered_statements as f64 / self.total_statements as f64 * 100.0)
    }

    fn record(&mut self, region: &CoverageRegion) {
        self.total_statements += region.statement_count;
        if region.covered {
            self.covered_statements += region.statement_count;
        }
    }
}

/// Aggregated coverage for one profile run
///
/// Built fresh per invocation; nothing is persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    files: HashMap<String, FileStat>,
    /// First-seen order of file paths; drives chart row order
    order: Vec<String>,
    totals: FileStat,
}

impl CoverageReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse profile text and aggregate it in one pass
    #[must_use]
    pub fn from_profile(text: &str) -> Self {
        let report = Self::from_regions(CoverProfile::new(text).regions());
        tracing::debug!(
            files = report.file_count(),
            total = report.totals.total_statements,
            covered = report.totals.covered_statements,
            "aggregated cover profile"
        );
        report
    }

    /// Aggregate an already-parsed region sequence
    #[must_use]
    pub fn from_regions(regions: impl IntoIterator<Item = CoverageRegion>) -> Self {
        let mut report = Self::new();
        for region in regions {
            report.record(&region);
        }
        report
    }

    /// Fold one region into the per-file and global counters
    ///
    /// No region is ever rejected; a zero-statement region contributes
    /// zero to both counters.
    pub fn record(&mut self, region: &CoverageRegion) {
        if !self.files.contains_key(&region.file_path) {
            self.order.push(region.file_path.clone());
        }
        self.files
            .entry(region.file_path.clone())
            .or_default()
            .record(region);
        self.totals.record(region);
    }

    /// Stats for one file, if it appeared in the profile
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileStat> {
        self.files.get(path)
    }

    /// Files and their stats in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileStat)> {
        self.order
            .iter()
            .filter_map(|path| self.files.get(path).map(|stat| (path.as_str(), stat)))
    }

    /// Number of distinct files seen
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.order.len()
    }

    /// True when no file has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Global covered/total counters
    #[must_use]
    pub fn totals(&self) -> FileStat {
        self.totals
    }

    /// Global coverage percentage, `None` when the profile reported no
    /// statements at all
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        self.totals.percent()
    }
}

/// Round a percentage to `decimals` places and drop trailing zeros
///
/// Matches the reference report output: `87.5` stays `87.5` (not
/// `87.50`), `100.0` becomes `100`, `66.666…` at two decimals becomes
/// `66.67`. Rounding is half-away-from-zero.
#[must_use]
pub fn format_percent(percent: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (percent * scale).round() / scale;
    let formatted = format!("{rounded:.prec$}", prec = decimals as usize);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
