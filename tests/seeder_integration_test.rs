//! End-to-end tests for seed runs.

mod common;

use chrono::{TimeZone, Utc};
use common::extract_values;
use inventory_seed::generator::{Generator, GeneratorOptions, TimestampMode};
use inventory_seed::seeder::{run, write_items, SeederConfig};
use std::fs;
use tempfile::TempDir;

const ITEM_HEADER: &str = r#"INSERT INTO "public"."inventory_items""#;
const TX_HEADER: &str = r#"INSERT INTO "public"."stock_transactions""#;

fn fixed_time() -> TimestampMode {
    TimestampMode::Fixed(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

fn split_statements(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .filter(|s| !s.trim().is_empty())
        .collect()
}

#[test]
fn test_run_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("seed.sql");

    let config = SeederConfig {
        count: 25,
        seed: Some(42),
        timestamps: fixed_time(),
        output: Some(output.clone()),
        ..Default::default()
    };

    let stats = run(config).unwrap();
    assert_eq!(stats.items_generated, 25);
    assert_eq!(stats.stock_transactions, 0);
    assert_eq!(stats.seed, Some(42));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.len() as u64, stats.bytes_written);

    let statements = split_statements(&content);
    assert_eq!(statements.len(), 25);
    for stmt in statements {
        assert!(stmt.starts_with(ITEM_HEADER));
        assert!(stmt.ends_with(");"));
    }
}

#[test]
fn test_run_zero_items() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("empty.sql");

    let config = SeederConfig {
        count: 0,
        seed: Some(1),
        output: Some(output.clone()),
        ..Default::default()
    };

    let stats = run(config).unwrap();
    assert_eq!(stats.items_generated, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_seeded_runs_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.sql");
    let second = temp_dir.path().join("b.sql");

    for path in [&first, &second] {
        run(SeederConfig {
            count: 10,
            seed: Some(7),
            timestamps: fixed_time(),
            initial_stock: true,
            output: Some(path.clone()),
            ..Default::default()
        })
        .unwrap();
    }

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_initial_stock_follows_each_item() {
    let mut gen = Generator::seeded(
        3,
        GeneratorOptions {
            timestamps: fixed_time(),
            ..Default::default()
        },
    );

    let mut out = Vec::new();
    let stats = write_items(&mut gen, 5, true, &mut out, None).unwrap();
    assert_eq!(stats.items_generated, 5);
    assert_eq!(stats.stock_transactions, 5);

    let content = String::from_utf8(out).unwrap();
    let statements = split_statements(&content);
    assert_eq!(statements.len(), 10);

    for pair in statements.chunks(2) {
        assert!(pair[0].starts_with(ITEM_HEADER));
        assert!(pair[1].starts_with(TX_HEADER));

        let item = extract_values(pair[0]);
        let tx = extract_values(pair[1]);
        assert_eq!(tx[1], item[0], "item_id references the item");
        assert_eq!(tx[3], item[4], "quantity equals stock_qty");
        assert_eq!(tx[5], item[4], "new_stock equals stock_qty");
        assert_eq!(tx[7], item[8], "same creator");
        assert_eq!(tx[8], item[6], "same timestamp");
    }
}

#[test]
fn test_missing_output_dir_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("missing").join("seed.sql");

    let config = SeederConfig {
        count: 1,
        output: Some(output),
        ..Default::default()
    };

    let err = run(config).unwrap_err();
    assert!(format!("{err:#}").contains("failed to create output file"));
}
