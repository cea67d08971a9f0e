//! Core data structures for CTD processing.
//!
//! Defines parsed cast records, the flat rows produced from them and the
//! statistics reported by the processing pipeline.

use crate::constants::metadata_keys;
use crate::parser::ParseResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Raw measurement triple taken from one variables-section line.
///
/// Values are kept as trimmed text; numeric validation happens in the
/// row extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub depth: String,
    pub temperature: String,
    pub salinity: String,
}

impl RawMeasurement {
    pub fn new(
        depth: impl Into<String>,
        temperature: impl Into<String>,
        salinity: impl Into<String>,
    ) -> Self {
        Self {
            depth: depth.into(),
            temperature: temperature.into(),
            salinity: salinity.into(),
        }
    }
}

/// One cast section of an export file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    /// Metadata labels to values, as found in the cast header
    pub metadata: HashMap<String, String>,

    /// Measurement triples in file order
    pub variables: Vec<RawMeasurement>,
}

impl CastRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata value for `key`, or an empty string when the cast lacks it
    pub fn metadata_or_empty(&self, key: &str) -> &str {
        self.metadata.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Flattened measurement row with the owning cast's metadata replicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatRow {
    pub latitude: String,
    pub longitude: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub depth: String,
    pub temperature: String,
    pub salinity: String,
}

impl FlatRow {
    /// Build a row from a cast's metadata and one of its measurements
    pub fn from_cast(cast: &CastRecord, measurement: &RawMeasurement) -> Self {
        Self {
            latitude: cast.metadata_or_empty(metadata_keys::LATITUDE).to_string(),
            longitude: cast.metadata_or_empty(metadata_keys::LONGITUDE).to_string(),
            year: cast.metadata_or_empty(metadata_keys::YEAR).to_string(),
            month: cast.metadata_or_empty(metadata_keys::MONTH).to_string(),
            day: cast.metadata_or_empty(metadata_keys::DAY).to_string(),
            depth: measurement.depth.clone(),
            temperature: measurement.temperature.clone(),
            salinity: measurement.salinity.clone(),
        }
    }

    /// Field values in output column order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.year.as_str(),
            self.month.as_str(),
            self.day.as_str(),
            self.depth.as_str(),
            self.temperature.as_str(),
            self.salinity.as_str(),
        ]
    }
}

/// Processing statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub casts_parsed: usize,
    pub empty_casts: usize,
    pub measurements_seen: usize,
    pub rows_emitted: usize,
    pub rows_dropped: usize,
    pub lines_ignored: usize,
    pub output_path: Option<PathBuf>,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Fold the counters of one parsed file into the totals
    pub fn record_parse(&mut self, result: &ParseResult) {
        let extraction = &result.extraction_stats;

        self.files_processed += 1;
        self.casts_parsed += extraction.casts_seen;
        self.empty_casts += extraction.empty_casts;
        self.measurements_seen += extraction.measurements_seen;
        self.rows_emitted += extraction.rows_emitted;
        self.rows_dropped += extraction.rows_dropped;
        self.lines_ignored += result.segment_stats.lines_ignored;
    }

    /// Percentage of measurement lines that became rows
    pub fn retention_rate(&self) -> f64 {
        if self.measurements_seen == 0 {
            0.0
        } else {
            (self.rows_emitted as f64 / self.measurements_seen as f64) * 100.0
        }
    }
}
