//! Parsing statistics and result structures for cast files
//!
//! Counters are diagnostics only: dropping a line or a measurement never
//! turns into an error.

use crate::models::{CastRecord, FlatRow};
use serde::Serialize;

/// Counters kept by the cast segmenter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentStats {
    /// Lines fed to the segmenter
    pub lines_read: usize,

    /// Lines that matched no rule and were dropped
    pub lines_ignored: usize,

    /// Metadata entries recorded (including overwrites of an existing key)
    pub metadata_entries: usize,

    /// Variables-section lines turned into measurement triples
    pub measurement_lines: usize,
}

/// Counters kept by the row extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub casts_seen: usize,

    /// Casts that carried no measurement triples at all
    pub empty_casts: usize,

    pub measurements_seen: usize,
    pub rows_emitted: usize,

    /// Measurements rejected for an empty or non-numeric value
    pub rows_dropped: usize,
}

/// Output of a full segment-then-extract run over one input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// Cast records in input order
    pub casts: Vec<CastRecord>,

    /// Validated rows in (cast, measurement) order
    pub rows: Vec<FlatRow>,

    pub segment_stats: SegmentStats,
    pub extraction_stats: ExtractionStats,
}

impl ParseResult {
    pub fn cast_count(&self) -> usize {
        self.casts.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
