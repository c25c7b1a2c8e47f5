//! Bar-Chart Rendering
//!
//! Paints the detailed per-file coverage report: a header with the
//! global percentage and one labelled covered/uncovered bar per file,
//! rows in the order files first appeared in the profile.

use crate::render::canvas::{Canvas, Rgb};
use crate::report::{format_percent, CoverageReport};
use crate::result::{CubrirError, CubrirResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default chart canvas width
pub const DEFAULT_CHART_WIDTH: u32 = 600;
/// Default chart canvas height
pub const DEFAULT_CHART_HEIGHT: u32 = 300;

const HEADER_X: u32 = 10;
const HEADER_Y: u32 = 10;
const HEADER_SCALE: u32 = 2;
const ROWS_TOP: u32 = 50;
const LABEL_X: u32 = 10;
const BAR_X: u32 = 200;
const BAR_HEIGHT: u32 = 20;
const ROW_GAP: u32 = 10;
const PERCENT_PAD: u32 = 10;
/// Horizontal space reserved for the label column and the percent column
const BAR_MARGINS: u32 = 320;

/// Colors used by the chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPalette {
    /// Canvas background
    pub background: Rgb,
    /// Covered bar segment
    pub covered: Rgb,
    /// Uncovered bar segment
    pub uncovered: Rgb,
    /// Header, labels and percentages
    pub text: Rgb,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: Rgb::from_hex(0xFFFFFF),
            covered: Rgb::new(75, 181, 67),
            uncovered: Rgb::new(181, 67, 67),
            text: Rgb::new(0, 0, 0),
        }
    }
}

/// Renders the per-file coverage bar chart
///
/// ## Example
///
/// ```no_run
/// use cubrir::{ChartRenderer, CoverageReport};
///
/// let report = CoverageReport::from_profile("mode: set\npkg/a.go:1.1,3.2 2 3 1\n");
/// let png = ChartRenderer::new().render(&report)?;
/// # Ok::<(), cubrir::CubrirError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
    palette: ChartPalette,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    /// Create a renderer with the default 600x300 canvas
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            palette: ChartPalette::default(),
        }
    }

    /// Set the canvas size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the color palette
    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Render the chart as encoded PNG bytes
    ///
    /// Files whose profile reported zero statements occupy no row. A
    /// report with zero statements overall has no defined percentage and
    /// fails with [`CubrirError::ZeroStatements`]; nothing is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`CubrirError::ZeroStatements`] on an all-zero report and
    /// [`CubrirError::ImageProcessing`] if PNG encoding fails.
    pub fn render(&self, report: &CoverageReport) -> CubrirResult<Vec<u8>> {
        let global = report
            .percent()
            .ok_or_else(|| CubrirError::zero_statements("global coverage"))?;

        let mut canvas = Canvas::new(self.width, self.height, self.palette.background);
        canvas.draw_text(
            HEADER_X,
            HEADER_Y,
            &format!("Coverage Report: {}%", format_percent(global, 2)),
            self.palette.text,
            HEADER_SCALE,
        );

        let max_bar_width = self.width.saturating_sub(BAR_MARGINS);
        let mut y = ROWS_TOP;
        for (path, stat) in report.iter() {
            let Some(percent) = stat.percent() else {
                // zero-statement file: no row, no vertical advance
                continue;
            };

            let covered_width =
                ((percent / 100.0 * f64::from(max_bar_width)) as u32).min(max_bar_width);

            canvas.draw_text(LABEL_X, y, &row_label(path), self.palette.text, 1);
            canvas.fill_rect(BAR_X, y, covered_width, BAR_HEIGHT, self.palette.covered);
            canvas.fill_rect(
                BAR_X + covered_width,
                y,
                max_bar_width - covered_width,
                BAR_HEIGHT,
                self.palette.uncovered,
            );
            canvas.draw_text(
                BAR_X + max_bar_width + PERCENT_PAD,
                y,
                &format!("{}%", format_percent(percent, 1)),
                self.palette.text,
                1,
            );

            y += BAR_HEIGHT + ROW_GAP;
        }

        tracing::debug!(files = report.file_count(), width = self.width, "chart rendered");
        canvas.encode()
    }

    /// Render the chart and write it to `path`
    ///
    /// The file is only written once encoding has fully succeeded, so a
    /// failed render leaves no partial image behind.
    ///
    /// # Errors
    ///
    /// As [`render`](Self::render), plus [`CubrirError::Io`] on write
    /// failure.
    pub fn save(&self, report: &CoverageReport, path: &Path) -> CubrirResult<()> {
        let data = self.render(report)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

/// Row label: the last two path segments, or the whole path if shorter
fn row_label(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((rest, last)) => match rest.rsplit_once('/') {
            Some((_, parent)) => format!("{parent}/{last}"),
            None => format!("{rest}/{last}"),
        },
        None => path.to_string(),
    }
}
