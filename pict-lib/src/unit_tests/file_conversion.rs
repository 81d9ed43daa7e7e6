//! Tests converting the tables in the test directory into argument files.

use super::TEST_FILE_PATH;
use crate::convert::{convert, write_lines};
use crate::table::{ReadOptions, Table};
use crate::{Conversion, Error, Subject, DESTINATION_EXTENSION, SOURCE_EXTENSION};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tempfile::TempDir;

const SENDER_LINES: [&str; 3] = [
    "hello --msg-content --msg-durable=yes 1 --count queue_a --address 127.0.0.1:5672 --broker",
    "hello --msg-content 10 --count topic_b --address 127.0.0.1:5672 --broker",
    "--msg-durable=no queue_a --address localhost:5672 --broker",
];

const RECEIVER_LINES: [&str; 2] = [
    "--log-msgs=dict 5 --timeout queue_a --address localhost:5672 --broker",
    "0 --timeout queue_a --address localhost:5672 --broker",
];

/// Convert the given test file into the temporary directory, returns the output.
fn convert_test_file(name: &str, dir: &TempDir) -> (usize, String) {
    let source = Path::new(TEST_FILE_PATH).join(name);
    let destination = dir.path().join(name).with_extension(DESTINATION_EXTENSION);

    let written = convert(&source, &destination, &ReadOptions::default()).unwrap();
    (written, fs::read_to_string(destination).unwrap())
}

/// Join lines the way they are written: each one terminated by a newline.
fn expected_output(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[test]
fn test_convert_sender() {
    let dir = tempfile::tempdir().unwrap();
    let (written, output) = convert_test_file("sender.out", &dir);

    assert_eq!(written, SENDER_LINES.len());
    assert_eq!(output, expected_output(&SENDER_LINES));
}

#[test]
fn test_convert_receiver() {
    let dir = tempfile::tempdir().unwrap();
    let (written, output) = convert_test_file("receiver.out", &dir);

    assert_eq!(written, RECEIVER_LINES.len());
    assert_eq!(output, expected_output(&RECEIVER_LINES));
}

#[test]
fn test_row_count_is_preserved() {
    let source = Path::new(TEST_FILE_PATH).join("sender.out");
    let table = Table::from_path(&source, &ReadOptions::default()).unwrap();

    let mut output = Vec::new();
    let written = write_lines(&table, &mut output).unwrap();

    assert_eq!(written, table.rows().len());
    assert_eq!(output.iter().filter(|b| **b == b'\n').count(), table.rows().len());
}

#[test]
fn test_header_only_gives_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let (written, output) = convert_test_file("header_only.out", &dir);

    assert_eq!(written, 0);
    assert!(output.is_empty());
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let source = Path::new(TEST_FILE_PATH).join("sender.out");
    let destination = dir.path().join("sender.csv");

    convert(&source, &destination, &ReadOptions::default()).unwrap();
    let first = fs::read(&destination).unwrap();
    convert(&source, &destination, &ReadOptions::default()).unwrap();
    let second = fs::read(&destination).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_destination_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("receiver.csv");
    fs::write(&destination, "stale content that is longer than the real output\n".repeat(10))
        .unwrap();

    let source = Path::new(TEST_FILE_PATH).join("receiver.out");
    convert(&source, &destination, &ReadOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        expected_output(&RECEIVER_LINES)
    );
}

#[test]
fn test_missing_source_keeps_destination() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("missing.out");
    let destination = dir.path().join("missing.csv");
    fs::write(&destination, "previous\n").unwrap();

    let result = convert(&source, &destination, &ReadOptions::default());

    assert!(matches!(result, Err(Error::Source { ref path, .. }) if *path == source));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "previous\n");
}

#[test]
fn test_ragged_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = Path::new(TEST_FILE_PATH).join("ragged.out");
    let destination = dir.path().join("ragged.csv");

    let result = convert(&source, &destination, &ReadOptions::default());

    assert!(matches!(result, Err(Error::Source { .. })));
    assert!(!destination.exists());
}

#[test]
fn test_uncreatable_destination_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = Path::new(TEST_FILE_PATH).join("sender.out");
    let destination = dir.path().join("no-such-dir").join("sender.csv");

    let result = convert(&source, &destination, &ReadOptions::default());

    assert!(matches!(result, Err(Error::CreateDestination { .. })));
}

#[test]
fn test_convert_all_subjects_in_directory() {
    let dir = tempfile::tempdir().unwrap();

    for subject in Subject::iter() {
        let conversion = Conversion::for_base_name(
            &subject.to_string(),
            Path::new(TEST_FILE_PATH),
            dir.path(),
            SOURCE_EXTENSION,
            DESTINATION_EXTENSION,
        );
        convert(&conversion.source, &conversion.destination, &ReadOptions::default()).unwrap();
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("sender.csv")).unwrap(),
        expected_output(&SENDER_LINES)
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("receiver.csv")).unwrap(),
        expected_output(&RECEIVER_LINES)
    );
}
