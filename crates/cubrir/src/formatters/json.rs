//! JSON Summary Formatter
//!
//! Emits the machine-readable summary the CI pipeline ingests alongside
//! the images:
//!
//! ```json
//! {
//!   "total_statements": 8,
//!   "covered_statements": 7,
//!   "percent": 87.5,
//!   "files": [
//!     { "path": "pkg/a.go", "total_statements": 3,
//!       "covered_statements": 2, "percent": 66.66666666666666 }
//!   ]
//! }
//! ```

use crate::report::CoverageReport;
use crate::result::{CubrirError, CubrirResult};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FileSummary<'a> {
    path: &'a str,
    total_statements: u64,
    covered_statements: u64,
    /// `null` for files whose profile reported zero statements
    percent: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    total_statements: u64,
    covered_statements: u64,
    percent: f64,
    files: Vec<FileSummary<'a>>,
}

/// JSON summary generator
#[derive(Debug)]
pub struct JsonFormatter<'a> {
    report: &'a CoverageReport,
}

impl<'a> JsonFormatter<'a> {
    /// Create a formatter over a report
    #[must_use]
    pub fn new(report: &'a CoverageReport) -> Self {
        Self { report }
    }

    /// Generate the pretty-printed JSON summary
    ///
    /// Files keep their first-seen order in the `files` array.
    ///
    /// # Errors
    ///
    /// Returns [`CubrirError::ZeroStatements`] when the report carries
    /// no statements, or [`CubrirError::Json`] on serialization failure.
    pub fn generate(&self) -> CubrirResult<String> {
        let percent = self
            .report
            .percent()
            .ok_or_else(|| CubrirError::zero_statements("global coverage"))?;

        let totals = self.report.totals();
        let summary = ReportSummary {
            total_statements: totals.total_statements,
            covered_statements: totals.covered_statements,
            percent,
            files: self
                .report
                .iter()
                .map(|(path, stat)| FileSummary {
                    path,
                    total_statements: stat.total_statements,
                    covered_statements: stat.covered_statements,
                    percent: stat.percent(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&summary)?)
    }

    /// Generate the summary and write it to `path`
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate), plus [`CubrirError::Io`] on
    /// write failure.
    pub fn save(&self, path: &Path) -> CubrirResult<()> {
        let content = self.generate()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
