//! Seed run: generate items and stream their statements to the output.

use crate::generator::{FakeProvider, Generator, GeneratorOptions, TimestampMode, DEFAULT_USER_ID};
use crate::writer::StatementWriter;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// Item count used when neither the command line nor a config file sets one
pub const DEFAULT_COUNT: usize = 1000;

/// Configuration for one seed run
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Number of inventory items to generate
    pub count: usize,
    /// Random seed (random if not specified)
    pub seed: Option<u64>,
    /// Value for created_by / updated_by
    pub user_id: Uuid,
    /// Timestamp policy
    pub timestamps: TimestampMode,
    /// Emit the initial stock ledger row after each item
    pub initial_stock: bool,
    /// Output file (default: stdout)
    pub output: Option<PathBuf>,
    /// Show progress bar
    pub progress: bool,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            user_id: DEFAULT_USER_ID,
            timestamps: TimestampMode::PerRecord,
            initial_stock: false,
            output: None,
            progress: false,
        }
    }
}

/// Statistics from a seed run
#[derive(Debug, Default, Clone)]
pub struct SeederStats {
    pub items_generated: u64,
    pub stock_transactions: u64,
    pub bytes_written: u64,
    /// Seed actually used, so the run can be repeated
    pub seed: Option<u64>,
}

/// Run the seeder
pub fn run(config: SeederConfig) -> anyhow::Result<SeederStats> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let options = GeneratorOptions {
        user_id: config.user_id,
        timestamps: config.timestamps,
    };
    let mut generator = Generator::seeded(seed, options);

    let progress_bar = if config.progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} items ({percent}%) {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Generating items...");
        Some(pb)
    } else {
        None
    };

    let mut stats = if let Some(ref path) = config.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        write_items(
            &mut generator,
            config.count,
            config.initial_stock,
            file,
            progress_bar.as_ref(),
        )?
    } else {
        let stdout = io::stdout();
        write_items(
            &mut generator,
            config.count,
            config.initial_stock,
            stdout.lock(),
            progress_bar.as_ref(),
        )?
    };

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    stats.seed = Some(seed);
    Ok(stats)
}

/// Generate `count` items and write their statements to `out`
pub fn write_items<R, F, W>(
    generator: &mut Generator<R, F>,
    count: usize,
    initial_stock: bool,
    out: W,
    progress: Option<&ProgressBar>,
) -> anyhow::Result<SeederStats>
where
    R: Rng,
    F: FakeProvider,
    W: Write,
{
    let mut writer = StatementWriter::new(out);
    let mut stats = SeederStats::default();

    generator.begin_batch();
    for _ in 0..count {
        let item = generator.next_item();
        writer
            .write_statement(&item.insert_statement())
            .context("failed to write statement")?;
        stats.items_generated += 1;

        if initial_stock {
            if let Some(tx) = generator.initial_stock_transaction(&item) {
                writer
                    .write_statement(&tx.insert_statement())
                    .context("failed to write statement")?;
                stats.stock_transactions += 1;
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    stats.bytes_written = writer.bytes_written();
    writer.finish().context("failed to flush output")?;

    Ok(stats)
}
