//! Cubrir: Coverage Profile Visualizer
//!
//! Cubrir (Spanish: "to cover") turns a raw statement-coverage profile
//! into per-file and global statistics and renders them as PNG
//! artifacts for documentation and CI pipelines: a detailed per-file
//! bar chart and a compact color-coded badge.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     CUBRIR PIPELINE                            │
//! ├────────────────────────────────────────────────────────────────┤
//! │  profile text → CoverProfile → CoverageReport ─┬─► chart PNG   │
//! │                  (regions)     (per-file +     ├─► badge PNG   │
//! │                                 global stats)  └─► text/JSON   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is a synchronous single-shot batch transform: each run
//! parses one profile, aggregates one report, and renders each artifact
//! independently. Nothing persists between runs.
//!
//! # Example
//!
//! ```
//! use cubrir::{BadgeRenderer, ChartRenderer, CoverageReport};
//!
//! let profile = "mode: set\n\
//!     pkg/a.go:1.1,3.2 2 3 1\n\
//!     pkg/b.go:1.1,2.2 5 5 1\n";
//!
//! let report = CoverageReport::from_profile(profile);
//! let chart_png = ChartRenderer::new().render(&report)?;
//! let badge_png = BadgeRenderer::new().render(&report)?;
//! assert!(chart_png.starts_with(&[137, 80, 78, 71]));
//! assert!(badge_png.starts_with(&[137, 80, 78, 71]));
//! # Ok::<(), cubrir::CubrirError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod profile;
mod report;
mod result;

/// Report formatters (plain text and JSON summaries)
pub mod formatters;

/// Raster rendering (canvas primitives, chart and badge)
pub mod render;

pub use profile::{CoverProfile, CoverageRegion, Regions};
pub use render::{
    BadgePalette, BadgeRenderer, Canvas, ChartPalette, ChartRenderer, Rgb, DEFAULT_BADGE_HEIGHT,
    DEFAULT_BADGE_WIDTH, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
};
pub use report::{format_percent, CoverageReport, FileStat};
pub use result::{CubrirError, CubrirResult};
