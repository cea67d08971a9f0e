//! Output placement relative to the input directory

use super::{cast_export, write_export};
use crate::config::CtdConfig;
use crate::processor::{CastProcessor, without_output_files};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn listing(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn test_bare_relative_output_keeps_inputs() {
    let files = listing(&["casts/a.csv", "casts/b.csv"]);

    let kept = without_output_files(files.clone(), Path::new("casts"), Path::new("rows.csv"));

    assert_eq!(kept, files);
}

#[test]
fn test_output_in_parent_directory_keeps_inputs() {
    let files = listing(&["data/casts/a.csv", "data/casts/deep/b.csv"]);

    let kept = without_output_files(
        files.clone(),
        Path::new("data/casts"),
        Path::new("data/rows.csv"),
    );

    assert_eq!(kept, files);
}

#[test]
fn test_output_file_inside_input_is_dropped() {
    let files = listing(&["casts/a.csv", "casts/rows.csv"]);

    let kept = without_output_files(files, Path::new("casts"), Path::new("casts/rows.csv"));

    assert_eq!(kept, listing(&["casts/a.csv"]));
}

#[test]
fn test_nested_output_directory_is_dropped() {
    let files = listing(&[
        "casts/a.csv",
        "casts/parsed/parsed_data.csv",
        "casts/parsed/parsed_data_20240101_120000.csv",
    ]);

    let kept = without_output_files(
        files,
        Path::new("casts"),
        Path::new("casts/parsed/parsed_data.csv"),
    );

    assert_eq!(kept, listing(&["casts/a.csv"]));
}

async fn process_into(input_dir: PathBuf, output: PathBuf) -> Vec<String> {
    let stats = CastProcessor::new(input_dir, Some(output.clone()))
        .unwrap()
        .with_config(CtdConfig::default().without_progress())
        .process()
        .await
        .unwrap();

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.output_path, Some(output.clone()));

    fs::read_to_string(&output)
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap().to_string())
        .collect()
}

fn write_two_exports(input_dir: &Path) {
    write_export(input_dir, "b.csv", &cast_export(&[("1971", &["3"])]));
    write_export(input_dir, "a.csv", &cast_export(&[("1969", &["1"])]));
}

#[tokio::test]
async fn test_output_in_sibling_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("casts");
    write_two_exports(&input_dir);

    let years = process_into(input_dir, temp_dir.path().join("out").join("rows.csv")).await;

    assert_eq!(years, vec!["1969", "1971"]);
}

#[tokio::test]
async fn test_output_in_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("casts");
    write_two_exports(&input_dir);

    let years = process_into(input_dir, temp_dir.path().join("rows.csv")).await;

    assert_eq!(years, vec!["1969", "1971"]);
}

#[tokio::test]
async fn test_previous_output_inside_input_is_not_reread() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("casts");
    write_two_exports(&input_dir);
    let output = input_dir.join("rows.csv");

    let config = CtdConfig::default().without_progress().with_overwrite();
    let processor = CastProcessor::new(input_dir, Some(output))
        .unwrap()
        .with_config(config);

    let first = processor.process().await.unwrap();
    let second = processor.process().await.unwrap();

    assert_eq!(first.files_processed, 2);
    assert_eq!(second.files_processed, 2);
    assert_eq!(second.rows_emitted, first.rows_emitted);
}
