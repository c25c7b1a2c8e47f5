//! Report Formatters
//!
//! Textual companions to the image artifacts: a plain-text per-file
//! report and a JSON summary for machine consumption. Both follow the
//! renderers' percentage rules, including the zero-statements failure
//! and the skip policy for files with no reported statements.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
