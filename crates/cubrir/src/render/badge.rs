//! Badge Rendering
//!
//! Paints the compact summary artifact: a dark fixed-size badge with a
//! `Coverage:` label and the global percentage, colored by threshold so
//! the number reads at a glance in a README or dashboard.

use crate::render::canvas::{Canvas, Rgb};
use crate::report::{format_percent, CoverageReport};
use crate::result::{CubrirError, CubrirResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default badge canvas width
pub const DEFAULT_BADGE_WIDTH: u32 = 165;
/// Default badge canvas height
pub const DEFAULT_BADGE_HEIGHT: u32 = 35;

const LABEL_X: u32 = 25;
const VALUE_X: u32 = 100;
const TEXT_Y: u32 = 10;
const LABEL_TEXT: &str = "Coverage:";

/// Thresholds separating the low/mid/high percentage colors
const MID_THRESHOLD: f64 = 50.0;
const HIGH_THRESHOLD: f64 = 80.0;

/// Colors used by the badge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgePalette {
    /// Canvas background
    pub background: Rgb,
    /// Static label text
    pub label: Rgb,
    /// Percentage below 50
    pub low: Rgb,
    /// Percentage from 50 up to (not including) 80
    pub mid: Rgb,
    /// Percentage of 80 and above
    pub high: Rgb,
}

impl Default for BadgePalette {
    fn default() -> Self {
        Self {
            background: Rgb::new(10, 10, 10),
            label: Rgb::new(255, 255, 255),
            low: Rgb::new(255, 0, 0),
            mid: Rgb::new(255, 255, 0),
            high: Rgb::new(0, 255, 0),
        }
    }
}

impl BadgePalette {
    /// Color bucket for a percentage; both threshold bounds are closed
    /// from below (exactly 50 is mid, exactly 80 is high)
    #[must_use]
    pub fn color_for_percent(&self, percent: f64) -> Rgb {
        if percent < MID_THRESHOLD {
            self.low
        } else if percent < HIGH_THRESHOLD {
            self.mid
        } else {
            self.high
        }
    }
}

/// Renders the global coverage badge
#[derive(Debug, Clone)]
pub struct BadgeRenderer {
    width: u32,
    height: u32,
    palette: BadgePalette,
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeRenderer {
    /// Create a renderer with the default 165x35 canvas
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_BADGE_WIDTH,
            height: DEFAULT_BADGE_HEIGHT,
            palette: BadgePalette::default(),
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
    pub fn with_palette(mut self, palette: BadgePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Render the badge as encoded PNG bytes
    ///
    /// The threshold color is chosen on the same 2-decimal-rounded value
    /// that is printed, so the color always matches the number shown.
    ///
    /// # Errors
    ///
    /// Returns [`CubrirError::ZeroStatements`] when the report carries no
    /// statements and [`CubrirError::ImageProcessing`] if encoding fails.
    pub fn render(&self, report: &CoverageReport) -> CubrirResult<Vec<u8>> {
        let global = report
            .percent()
            .ok_or_else(|| CubrirError::zero_statements("global coverage"))?;
        let rounded = (global * 100.0).round() / 100.0;

        let mut canvas = Canvas::new(self.width, self.height, self.palette.background);
        canvas.draw_text(LABEL_X, TEXT_Y, LABEL_TEXT, self.palette.label, 1);
        canvas.draw_text(
            VALUE_X,
            TEXT_Y,
            &format!("{}%", format_percent(global, 2)),
            self.palette.color_for_percent(rounded),
            1,
        );

        canvas.encode()
    }

    /// Render the badge and write it to `path`
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
