//! Test utilities for cast parser testing
//!
//! Builders for cast export text in the layout of a real CTD export, used
//! across the parser test modules.

use crate::constants::SECTION_DELIMITER;

mod pipeline_tests;

/// Build one cast section: delimiter, metadata lines, then a variables block
pub fn cast_section(metadata: &[&str], variables: &[&str]) -> String {
    let mut lines = vec![SECTION_DELIMITER.to_string()];
    lines.extend(metadata.iter().map(|line| line.to_string()));
    lines.push("VARIABLES ,Depth     ,F,O,Temperatur ,F,O,Salinity   ,F,O,".to_string());
    lines.extend(variables.iter().map(|line| line.to_string()));
    lines.push("END OF VARIABLES SECTION".to_string());
    lines.join("\n")
}

/// Variables line with depth, temperature and salinity at their positions
pub fn variable_line(row: usize, depth: &str, temperature: &str, salinity: &str) -> String {
    format!(
        "{},{},0, ,{},0, ,{},0, ,",
        row, depth, temperature, salinity
    )
}

/// A two-cast export in the style of a World Ocean Database CTD extract
pub fn create_test_export() -> String {
    let first = cast_section(
        &[
            "CAST                        ,,      12345,WOD Unique Cast Number,WOD code",
            "Latitude                    ,,     44.565,decimal degrees,,",
            "Longitude                   ,,   -63.9917,decimal degrees,,",
            "Year                        ,,       1969,,,",
            "Month                       ,,          7,,,",
            "Day                         ,,          2,,,",
        ],
        &[
            "UNITS     ,m         , , ,degrees C  , , ,PSS        , , ,",
            "Prof-Flag ,          ,0, ,           ,0, ,           ,0, ,",
            &variable_line(1, "9.92", "14.9", "31.23"),
            &variable_line(2, "19.84", "5", "31.34"),
            &variable_line(3, "29.76", "3.8", "31.5"),
        ],
    );

    let second = cast_section(
        &[
            "Latitude                    ,,     44.612,decimal degrees,,",
            "Longitude                   ,,   -63.5012,decimal degrees,,",
            "Year                        ,,       1970,,,",
            "Month                       ,,          8,,,",
            "Day                         ,,         15,,,",
        ],
        &[
            &variable_line(1, "5.0", "16.1", "30.9"),
            &variable_line(2, "10.0", "", "31.0"),
            &variable_line(3, "15.0", "12.2", "31.1"),
        ],
    );

    format!("{}\n{}\n", first, second)
}
