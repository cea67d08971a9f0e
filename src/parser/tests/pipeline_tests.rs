//! End-to-end tests for segment-then-extract parsing

use super::super::{parse_lines, parse_text};
use super::create_test_export;
use crate::constants::SECTION_DELIMITER;

#[test]
fn test_single_cast_scenario() {
    let lines = vec![
        SECTION_DELIMITER,
        "Latitude,1,44.565",
        "Longitude,1,-63.9917",
        "Year,1,1969",
        "VARIABLES",
        "1,9.92,0,0,14.9,0,0,31.23",
        "2,,0,0,5,0,0,31.34",
        "END OF VARIABLES SECTION",
    ];

    let result = parse_lines(lines);

    assert_eq!(result.cast_count(), 1);
    assert_eq!(result.row_count(), 1);
    assert_eq!(
        result.rows[0].fields(),
        ["44.565", "-63.9917", "1969", "", "", "9.92", "14.9", "31.23"]
    );
}

#[test]
fn test_export_rows_and_stats() {
    let result = parse_text(&create_test_export());

    // Cast 1: units and flag lines dropped, three rows kept.
    // Cast 2: one row with a blank temperature dropped.
    assert_eq!(result.row_count(), 5);
    assert_eq!(result.extraction_stats.measurements_seen, 8);
    assert_eq!(result.extraction_stats.rows_dropped, 3);
    assert_eq!(result.extraction_stats.casts_seen, 2);

    let depths: Vec<&str> = result.rows.iter().map(|r| r.depth.as_str()).collect();
    assert_eq!(depths, vec!["9.92", "19.84", "29.76", "5.0", "15.0"]);
    assert_eq!(result.rows[3].latitude, "44.612");
    assert_eq!(result.rows[3].day, "15");
}

#[test]
fn test_parsing_is_idempotent() {
    let text = create_test_export();

    let first = parse_text(&text);
    let second = parse_text(&text);

    assert_eq!(first, second);
}

#[test]
fn test_text_without_delimiter_yields_nothing() {
    let result = parse_text("Latitude,1,44.565\nVARIABLES\n1,9.92,0,0,14.9,0,0,31.23\n");

    assert_eq!(result.cast_count(), 0);
    assert_eq!(result.row_count(), 0);
    assert_eq!(result.segment_stats.lines_ignored, 3);
}
