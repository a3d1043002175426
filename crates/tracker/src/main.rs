//! Rep Tracker - landmark replay entry point
//!
//! Usage: rep-replay <input.jsonl> [config.toml]

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracker::{init_logging, replay_file, TrackerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: rep-replay <input.jsonl> [config.toml]"),
    };
    let config_path = args.next().map(PathBuf::from);

    let config = TrackerConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    init_logging(&config)?;

    info!("=== Rep Tracker v{} ===", env!("CARGO_PKG_VERSION"));

    let outcome = replay_file(&input, &config)
        .await
        .with_context(|| format!("Replay of {} failed", input.display()))?;

    for announcement in &outcome.announcements {
        info!(priority = announcement.priority, "Say: {}", announcement.text);
    }

    println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    Ok(())
}
