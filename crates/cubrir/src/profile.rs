//! Cover Profile Parsing
//!
//! Parses the line-oriented statement coverage profile format:
//!
//! ```text
//! mode: set
//! pkg/a.go:1.1,3.2 2 3 1
//! pkg/a.go:4.1,5.2 1 1 0
//! ```
//!
//! The first line is a mode header and is discarded without inspection.
//! Every other non-blank line describes one region: a location token
//! (`<file>:<start>.<col>,<end>.<col>`), zero or more middle fields, and
//! two trailing fields holding the statement count and the covered flag.
//!
//! Parsing is deliberately lenient. Lines with no `:` in the location
//! token or fewer than two trailing fields are skipped; numeric fields
//! that fail to parse coerce to `0`; a covered flag is true only for the
//! literal `1`. None of these produce errors.

use serde::{Deserialize, Serialize};

/// One reported code region from a cover profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRegion {
    /// Source file the region belongs to
    pub file_path: String,
    /// Number of statements in the region
    pub statement_count: u64,
    /// Whether the region was executed
    pub covered: bool,
}

/// A raw cover profile held as text
///
/// Holds a borrow of the full profile; [`regions`](Self::regions) can be
/// called any number of times and always yields the identical sequence.
#[derive(Debug, Clone, Copy)]
pub struct CoverProfile<'a> {
    text: &'a str,
}

impl<'a> CoverProfile<'a> {
    /// Wrap profile text for parsing
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Iterate the regions of this profile in file order
    #[must_use]
    pub fn regions(&self) -> Regions<'a> {
        let mut lines = self.text.lines();
        // mode header, content never inspected
        let _ = lines.next();
        Regions { lines }
    }
}

/// Lazy iterator over the valid regions of a profile
#[derive(Debug, Clone)]
pub struct Regions<'a> {
    lines: std::str::Lines<'a>,
}

impl Iterator for Regions<'_> {
    type Item = CoverageRegion;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            if let Some(region) = parse_region(line) {
                return Some(region);
            }
        }
    }
}

/// Parse one region line; `None` for blank or malformed lines
fn parse_region(line: &str) -> Option<CoverageRegion> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }

    let (file_path, _) = fields[0].split_once(':')?;
    let statement_count = fields[fields.len() - 2].parse().unwrap_or(0);
    let covered = fields[fields.len() - 1] == "1";

    Some(CoverageRegion {
        file_path: file_path.to_string(),
        statement_count,
        covered,
    })
}
