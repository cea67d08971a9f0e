//! Row extraction and measurement validation
//!
//! Flattens cast records into [`FlatRow`]s, one per measurement triple whose
//! depth, temperature and salinity are all usable numbers. Rejected triples
//! are counted and skipped.

use tracing::trace;

use super::stats::ExtractionStats;
use crate::models::{CastRecord, FlatRow, RawMeasurement};

/// Check if a measurement field represents missing data.
///
/// Empty text, text that is not a number, and NaN all count as missing.
pub fn is_missing_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    match trimmed.parse::<f64>() {
        Ok(number) => number.is_nan(),
        Err(_) => true,
    }
}

/// True when all three fields of the triple are present and numeric
pub fn is_valid_measurement(measurement: &RawMeasurement) -> bool {
    !is_missing_value(&measurement.depth)
        && !is_missing_value(&measurement.temperature)
        && !is_missing_value(&measurement.salinity)
}

/// Append the valid rows of one cast to `rows`
pub fn extract_cast_into(cast: &CastRecord, rows: &mut Vec<FlatRow>, stats: &mut ExtractionStats) {
    stats.casts_seen += 1;
    if cast.is_empty() {
        stats.empty_casts += 1;
    }

    for measurement in &cast.variables {
        stats.measurements_seen += 1;

        if is_valid_measurement(measurement) {
            rows.push(FlatRow::from_cast(cast, measurement));
            stats.rows_emitted += 1;
        } else {
            trace!("Dropping measurement {:?}", measurement);
            stats.rows_dropped += 1;
        }
    }
}

/// Flatten casts into rows, preserving cast order then measurement order
pub fn extract_rows(casts: &[CastRecord]) -> (Vec<FlatRow>, ExtractionStats) {
    let mut rows = Vec::new();
    let mut stats = ExtractionStats::default();

    for cast in casts {
        extract_cast_into(cast, &mut rows, &mut stats);
    }

    (rows, stats)
}
