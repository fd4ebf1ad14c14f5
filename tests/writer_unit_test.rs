//! Unit tests for the statement writer.

use inventory_seed::writer::{StatementWriter, STMT_BUFFER_COUNT};
use std::fs::File;
use tempfile::TempDir;

#[test]
fn test_statements_separated_by_blank_line() {
    let mut writer = StatementWriter::new(Vec::new());
    writer.write_statement("INSERT INTO t1 VALUES ('1');").unwrap();
    writer.write_statement("INSERT INTO t1 VALUES ('2');").unwrap();

    assert_eq!(writer.statements_written(), 2);

    let out = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(
        out,
        "INSERT INTO t1 VALUES ('1');\n\nINSERT INTO t1 VALUES ('2');\n\n"
    );
}

#[test]
fn test_bytes_written() {
    let mut writer = StatementWriter::new(Vec::new());
    writer.write_statement("abc;").unwrap();
    writer.write_statement("de;").unwrap();

    assert_eq!(writer.bytes_written(), 11);
    let out = writer.finish().unwrap();
    assert_eq!(out.len() as u64, 11);
}

#[test]
fn test_empty_writer() {
    let writer = StatementWriter::new(Vec::new());
    assert_eq!(writer.statements_written(), 0);
    assert!(writer.finish().unwrap().is_empty());
}

#[test]
fn test_file_writer_flushes_periodically() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("seed.sql");

    let mut writer = StatementWriter::new(File::create(&file_path).unwrap());
    for i in 0..STMT_BUFFER_COUNT + 5 {
        writer
            .write_statement(&format!("INSERT INTO t1 VALUES ('{i}');"))
            .unwrap();
    }
    writer.flush().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    assert_eq!(content.matches("INSERT INTO t1").count(), STMT_BUFFER_COUNT + 5);
    assert!(content.ends_with(&format!("('{}');\n\n", STMT_BUFFER_COUNT + 4)));
}
