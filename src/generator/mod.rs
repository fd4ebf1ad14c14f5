//! Inventory item generator.
//!
//! Samples `InventoryItem` rows from an injected random source and fake data
//! provider, and renders them as `INSERT` statements.

pub mod fake;

use crate::record::{format_size, InventoryItem, StockTransaction};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

pub use self::fake::{capitalize, FakeProvider, FakerProvider};

/// User id written to `created_by` / `updated_by` unless overridden
pub const DEFAULT_USER_ID: Uuid = Uuid::from_u128(0xebaba906_671a_4dda_8ce7_676171a692dd);

/// Inclusive bounds for each sampled field
pub const SIZE_RANGE_MM: (u32, u32) = (100, 1000);
pub const STOCK_QTY_RANGE: (u32, u32) = (1, 1000);
pub const LOW_STOCK_WARNING_RANGE: (u32, u32) = (10, 100);

/// Number of words in a generated remark
pub const REMARK_WORDS: usize = 5;

/// How `created_at` / `updated_at` are sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampMode {
    /// Read the clock for every record
    #[default]
    PerRecord,
    /// Read the clock once per `generate` call
    PerBatch,
    /// Use the given instant for every record
    Fixed(DateTime<Utc>),
}

/// Generator settings
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub user_id: Uuid,
    pub timestamps: TimestampMode,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
            timestamps: TimestampMode::PerRecord,
        }
    }
}

/// Inventory item generator
pub struct Generator<R: Rng, F: FakeProvider> {
    rng: R,
    fake: F,
    options: GeneratorOptions,
    /// Clock reading shared by the current batch in `PerBatch` mode
    batch_time: Option<DateTime<Utc>>,
}

impl<R: Rng, F: FakeProvider> Generator<R, F> {
    pub fn new(rng: R, fake: F, options: GeneratorOptions) -> Self {
        Self {
            rng,
            fake,
            options,
            batch_time: None,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Start a new batch. In `PerBatch` mode this takes the shared clock reading.
    pub fn begin_batch(&mut self) {
        self.batch_time = match self.options.timestamps {
            TimestampMode::PerBatch => Some(Utc::now()),
            _ => None,
        };
    }

    /// Sample one inventory item
    pub fn next_item(&mut self) -> InventoryItem {
        let id = self.next_uuid();
        let item_name = format!("{} Item", capitalize(&self.fake.word()));
        let item_brand = self.fake.company_name();
        let width = self.rng.random_range(SIZE_RANGE_MM.0..=SIZE_RANGE_MM.1);
        let height = self.rng.random_range(SIZE_RANGE_MM.0..=SIZE_RANGE_MM.1);
        let stock_qty = self
            .rng
            .random_range(STOCK_QTY_RANGE.0..=STOCK_QTY_RANGE.1);
        let remark = self.fake.sentence(REMARK_WORDS);
        let timestamp = self.timestamp();
        let reserved_quantity = self.rng.random_range(0..=stock_qty / 2);
        let low_stock_warning = self
            .rng
            .random_range(LOW_STOCK_WARNING_RANGE.0..=LOW_STOCK_WARNING_RANGE.1);

        InventoryItem {
            id,
            item_name,
            item_brand,
            size: format_size(width, height),
            stock_qty,
            remark,
            created_at: timestamp,
            updated_at: timestamp,
            created_by: self.options.user_id,
            updated_by: self.options.user_id,
            reserved_quantity,
            low_stock_warning,
        }
    }

    /// Ledger row recording the item's initial stock
    pub fn initial_stock_transaction(&mut self, item: &InventoryItem) -> Option<StockTransaction> {
        if item.stock_qty == 0 {
            return None;
        }
        let id = self.next_uuid();
        StockTransaction::initial_stock(id, item)
    }

    /// Generate `n` item `INSERT` statements in generation order
    pub fn generate(&mut self, n: usize) -> Vec<String> {
        self.begin_batch();
        (0..n).map(|_| self.next_item().insert_statement()).collect()
    }

    fn next_uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.random()).into_uuid()
    }

    fn timestamp(&mut self) -> DateTime<Utc> {
        match self.options.timestamps {
            TimestampMode::PerRecord => Utc::now(),
            TimestampMode::Fixed(ts) => ts,
            TimestampMode::PerBatch => *self.batch_time.get_or_insert_with(Utc::now),
        }
    }
}

impl Generator<StdRng, FakerProvider<StdRng>> {
    /// Reproducible generator: same seed, same items
    pub fn seeded(seed: u64, options: GeneratorOptions) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let fake_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        Self::new(rng, FakerProvider::new(fake_rng), options)
    }

    pub fn from_entropy(options: GeneratorOptions) -> Self {
        Self::seeded(rand::random(), options)
    }
}

/// Generate `n` statements with default options and fresh randomness
pub fn generate(n: usize) -> Vec<String> {
    Generator::from_entropy(GeneratorOptions::default()).generate(n)
}
