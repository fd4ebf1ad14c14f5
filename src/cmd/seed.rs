//! Seed command CLI handler.

use super::Cli;
use inventory_seed::config::{parse_timestamp, SeedYamlConfig};
use inventory_seed::generator::{TimestampMode, DEFAULT_USER_ID};
use inventory_seed::seeder::{self, SeederConfig, DEFAULT_COUNT};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = match cli.config {
        Some(ref path) => SeedYamlConfig::load(path)?,
        None => SeedYamlConfig::default(),
    };

    let config = resolve(&cli, &file_config)?;
    let explicit_seed = config.seed.is_some();
    let output = config.output.clone();
    let progress = config.progress;

    let stats = seeder::run(config)?;

    if let Some(path) = output {
        eprintln!(
            "Generated {} items to {}",
            stats.items_generated,
            path.display()
        );
    }

    if progress {
        eprintln!();
        eprintln!("Seed Statistics:");
        eprintln!("  Items generated: {}", stats.items_generated);
        if stats.stock_transactions > 0 {
            eprintln!("  Stock transactions: {}", stats.stock_transactions);
        }
        eprintln!("  Bytes written: {}", stats.bytes_written);
        if let (false, Some(seed)) = (explicit_seed, stats.seed) {
            eprintln!("  Seed: {} (pass --seed {} to reproduce)", seed, seed);
        }
    }

    Ok(())
}

/// Merge command-line flags over the config file over built-in defaults
fn resolve(cli: &Cli, file: &SeedYamlConfig) -> anyhow::Result<SeederConfig> {
    let timestamps = if let Some(ref ts) = cli.timestamp {
        TimestampMode::Fixed(parse_timestamp(ts)?)
    } else if cli.freeze_timestamp {
        TimestampMode::PerBatch
    } else {
        file.timestamp_mode()?.unwrap_or_default()
    };

    Ok(SeederConfig {
        count: cli.count.or(file.count).unwrap_or(DEFAULT_COUNT),
        seed: cli.seed.or(file.seed),
        user_id: cli.user_id.or(file.user_id).unwrap_or(DEFAULT_USER_ID),
        timestamps,
        initial_stock: cli.with_initial_stock || file.initial_stock.unwrap_or(false),
        output: cli.output.clone(),
        progress: cli.progress,
    })
}
