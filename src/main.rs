//! `loadout`: rank every equipment combination by stat thresholds.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_loadout::gear::Inventory;
use u_loadout::loadout::{EvaluatorConfig, LoadoutEvaluator};
use u_loadout::report::{render_json, render_text};

#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Optimize equipment stat thresholds", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON file containing the available equipment
    equipment: PathBuf,

    /// Masterwork equipment, if it is not already
    #[arg(long)]
    masterwork: bool,

    /// Emit ranked loadouts as JSON
    #[arg(long)]
    json: bool,

    /// Score combinations on a single thread
    #[arg(long)]
    sequential: bool,

    /// Refuse to run when the inventory has more combinations (0 = no limit)
    #[arg(long, env = "LOADOUT_MAX_COMBINATIONS", default_value_t = 0)]
    max_combinations: usize,

    /// Log level
    #[arg(long, env = "LOADOUT_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let inventory = Inventory::load(&cli.equipment, cli.masterwork)
        .with_context(|| format!("could not load {}", cli.equipment.display()))?;

    let config = EvaluatorConfig::default()
        .with_parallel(!cli.sequential)
        .with_max_combinations(cli.max_combinations);
    let ranked = LoadoutEvaluator::new(config).rank_all(&inventory)?;

    let output = if cli.json {
        let mut json = render_json(&inventory, &ranked)?;
        json.push('\n');
        json
    } else {
        render_text(&inventory, &ranked)
    };

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write results")?;
    info!(loadouts = ranked.len(), "done");
    Ok(())
}
