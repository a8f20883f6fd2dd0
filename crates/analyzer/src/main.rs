//! Motor Vibration Analyzer - Main Entry Point

use analyzer::PipelineConfig;
use anyhow::bail;
use tracing::info;

fn main() -> anyhow::Result<()> {
    analyzer::init_logging();

    info!("=== Motor Vibration Analyzer v{} ===", env!("CARGO_PKG_VERSION"));

    let Some(config_path) = std::env::args().nth(1) else {
        bail!("usage: analyzer <config-file>");
    };
    let config = PipelineConfig::from_file(&config_path)?;

    analyzer::run(&config)
}
