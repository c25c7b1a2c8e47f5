//! Render Artifacts Demo
//!
//! Parses an embedded cover profile and writes every artifact Cubrir
//! produces: the detailed chart PNG, the compact badge PNG, and the
//! text and JSON summaries.
//!
//! # Running
//!
//! ```bash
//! cargo run --example render_artifacts -p cubrir
//! ```

use cubrir::formatters::{JsonFormatter, TextFormatter};
use cubrir::{BadgeRenderer, ChartRenderer, CoverageReport, CubrirResult};
use std::path::Path;

const PROFILE: &str = "mode: set\n\
    pkg/engine/buffer.go:10.2,14.3 12 1\n\
    pkg/engine/buffer.go:16.2,21.3 9 1\n\
    pkg/engine/buffer.go:23.2,25.3 4 0\n\
    pkg/engine/storage.go:8.2,30.3 40 1\n\
    pkg/engine/storage.go:32.2,38.3 11 0\n\
    pkg/handlers/http.go:12.2,19.3 18 1\n\
    pkg/handlers/http.go:21.2,24.3 7 0\n\
    pkg/handlers/tcp.go:9.2,28.3 33 0\n\
    pkg/utils/format.go:5.2,7.3 6 1\n";

fn main() -> CubrirResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let report = CoverageReport::from_profile(PROFILE);

    println!("=== Text report ===\n");
    print!("{}", TextFormatter::new(&report).generate()?);

    ChartRenderer::new().save(&report, Path::new("coverage-full.png"))?;
    BadgeRenderer::new().save(&report, Path::new("coverage.png"))?;
    JsonFormatter::new(&report).save(Path::new("coverage.json"))?;

    println!("\nWrote coverage-full.png, coverage.png, coverage.json");
    Ok(())
}
