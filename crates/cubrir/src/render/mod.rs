//! Raster Rendering
//!
//! Everything that turns a [`CoverageReport`](crate::CoverageReport)
//! into pixels: the canvas primitives, the embedded bitmap font, and
//! the chart and badge renderers. Each renderer produces one complete
//! encoded PNG per call or fails without emitting anything.

mod badge;
mod canvas;
mod chart;
mod font;

pub use badge::{BadgePalette, BadgeRenderer, DEFAULT_BADGE_HEIGHT, DEFAULT_BADGE_WIDTH};
pub use canvas::{Canvas, Rgb};
pub use chart::{ChartPalette, ChartRenderer, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
