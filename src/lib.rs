//! Synthetic `INSERT` statements for seeding an `inventory_items` table.
//!
//! # Example
//!
//! ```rust
//! use inventory_seed::generator::{Generator, GeneratorOptions};
//!
//! // Same seed, same items
//! let mut gen = Generator::seeded(42, GeneratorOptions::default());
//! let statements = gen.generate(3);
//!
//! assert_eq!(statements.len(), 3);
//! assert!(statements[0].starts_with(r#"INSERT INTO "public"."inventory_items""#));
//! ```

pub mod config;
pub mod generator;
pub mod record;
pub mod seeder;
pub mod writer;

pub use generator::{generate, Generator, GeneratorOptions, TimestampMode, DEFAULT_USER_ID};
pub use record::{InventoryItem, SqlValue, StockTransaction};
pub use seeder::{SeederConfig, SeederStats};
