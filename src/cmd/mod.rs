mod seed;

use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "inventory-seed")]
#[command(version)]
#[command(
    about = "Generate synthetic INSERT statements for the inventory_items table",
    long_about = None
)]
pub struct Cli {
    /// Number of inventory items to generate [default: 1000]
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// User id written to created_by / updated_by
    #[arg(long)]
    pub user_id: Option<Uuid>,

    /// Use one timestamp for the whole run instead of one per item
    #[arg(long, conflicts_with = "timestamp")]
    pub freeze_timestamp: bool,

    /// Use this RFC 3339 timestamp for every item (e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Also emit the "Initial stock" stock_transactions row for each item
    #[arg(long)]
    pub with_initial_stock: bool,

    /// Output SQL file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show progress during generation
    #[arg(short, long)]
    pub progress: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    seed::run(cli)
}
