//! Integration tests for the processor module
//!
//! Tests the complete processing pipeline using temporary cast exports.

pub mod output_location;

use crate::constants::SECTION_DELIMITER;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a cast export with one cast per `(year, depths)` entry
pub fn cast_export(casts: &[(&str, &[&str])]) -> String {
    let mut lines = Vec::new();
    for (year, depths) in casts {
        lines.push(SECTION_DELIMITER.to_string());
        lines.push("Latitude     ,,   44.565,decimal degrees,,".to_string());
        lines.push("Longitude    ,,  -63.9917,decimal degrees,,".to_string());
        lines.push(format!("Year         ,,     {},,,", year));
        lines.push("Month        ,,        7,,,".to_string());
        lines.push("Day          ,,        2,,,".to_string());
        lines.push("VARIABLES ,Depth ,F,O,Temperatur ,F,O,Salinity ,F,O,".to_string());
        lines.push("UNITS ,m , , ,degrees C , , ,PSS , , ,".to_string());
        for (row, depth) in depths.iter().enumerate() {
            lines.push(format!("{},{},0, ,14.9,0, ,31.23,0, ,", row + 1, depth));
        }
        lines.push("END OF VARIABLES SECTION".to_string());
    }
    lines.join("\n")
}

/// Write an export into `dir` and return its path
pub fn write_export(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
