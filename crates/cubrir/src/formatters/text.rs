//! Plain-Text Report Formatter

use crate::report::CoverageReport;
use crate::result::{CubrirError, CubrirResult};
use std::path::Path;

/// Plain-text report generator
///
/// One `path: NN.NN% (covered/total statements)` line per file in
/// first-seen order, then a total line. Percentages here use fixed two
/// decimals, unlike the trimmed form printed on the images.
#[derive(Debug)]
pub struct TextFormatter<'a> {
    report: &'a CoverageReport,
}

impl<'a> TextFormatter<'a> {
    /// Create a formatter over a report
    #[must_use]
    pub fn new(report: &'a CoverageReport) -> Self {
        Self { report }
    }

    /// Generate the text report
    ///
    /// # Errors
    ///
    /// Returns [`CubrirError::ZeroStatements`] when the report carries
    /// no statements at all.
    pub fn generate(&self) -> CubrirResult<String> {
        use std::fmt::Write;

        let global = self
            .report
            .percent()
            .ok_or_else(|| CubrirError::zero_statements("global coverage"))?;

        let mut output = String::new();
        for (path, stat) in self.report.iter() {
            let Some(percent) = stat.percent() else {
                continue;
            };
            let _ = writeln!(
                output,
                "{path}: {percent:.2}% ({}/{} statements)",
                stat.covered_statements, stat.total_statements
            );
        }

        let totals = self.report.totals();
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Total Coverage: {global:.2}% ({}/{} statements)",
            totals.covered_statements, totals.total_statements
        );

        Ok(output)
    }

    /// Generate the report and write it to `path`
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

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::profile::CoverageRegion;

    const SAMPLE: &str = "mode: set\n\
        pkg/a.go:1.1,3.2 2 3 1\n\
        pkg/a.go:4.1,5.2 1 1 0\n\
        pkg/b.go:1.1,2.2 5 5 1\n";

    #[test]
    fn test_per_file_lines() {
        let report = CoverageReport::from_profile(SAMPLE);
        let output = TextFormatter::new(&report).generate().unwrap();

        assert!(output.contains("pkg/a.go: 66.67% (2/3 statements)"));
        assert!(output.contains("pkg/b.go: 100.00% (5/5 statements)"));
    }

    #[test]
    fn test_total_line() {
        let report = CoverageReport::from_profile(SAMPLE);
        let output = TextFormatter::new(&report).generate().unwrap();

        assert!(output.contains("Total Coverage: 87.50% (7/8 statements)"));
    }

    #[test]
    fn test_files_in_first_seen_order() {
        let report = CoverageReport::from_profile(SAMPLE);
        let output = TextFormatter::new(&report).generate().unwrap();

        let a = output.find("pkg/a.go").unwrap();
        let b = output.find("pkg/b.go").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_zero_statement_file_skipped() {
        let report = CoverageReport::from_regions([
            CoverageRegion {
                file_path: "pkg/empty.go".to_string(),
                statement_count: 0,
                covered: false,
            },
            CoverageRegion {
                file_path: "pkg/a.go".to_string(),
                statement_count: 2,
                covered: true,
            },
        ]);
        let output = TextFormatter::new(&report).generate().unwrap();

        assert!(!output.contains("pkg/empty.go"));
        assert!(output.contains("pkg/a.go"));
    }

    #[test]
    fn test_empty_report_fails() {
        let report = CoverageReport::new();
        let err = TextFormatter::new(&report).generate().unwrap_err();
        assert!(matches!(err, CubrirError::ZeroStatements { .. }));
    }

    #[test]
    fn test_save_writes_file() {
        let report = CoverageReport::from_profile(SAMPLE);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverage.txt");

        TextFormatter::new(&report).save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Total Coverage:"));
    }
}
