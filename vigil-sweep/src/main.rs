//! vigil-sweep — daily decay sweep over all zones.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vigil_core::config::EngineConfig;
use vigil_engine::ConfidenceEngine;
use vigil_storage::ZoneStore;
use vigil_sweep::DecaySweep;

/// Apply daily time decay, expire stale hazards, and reset 24h counters.
#[derive(Parser, Debug)]
#[command(name = "vigil-sweep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the zone database
    #[arg(long, default_value = "vigil.db")]
    db_path: PathBuf,

    /// Engine config TOML; reference thresholds when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let store = ZoneStore::open(&cli.db_path)
        .with_context(|| format!("opening store at {}", cli.db_path.display()))?;
    let sweep = DecaySweep::new(ConfidenceEngine::with_config(config));
    let report = sweep.run(&store, chrono::Utc::now())?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
