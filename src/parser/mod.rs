//! CTD cast export parser
//!
//! Turns the text of a cast export into flat measurement rows:
//! - [`segmenter`] - state machine splitting lines into cast records
//! - [`extractor`] - validation and flattening of cast measurements into rows
//! - [`stats`] - diagnostic counters and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ctd_processor::parser::parse_text;
//!
//! let text = "#--------------------------------------------------------------------------------\n\
//!             Latitude,decimal degrees,44.565\n\
//!             VARIABLES\n\
//!             1,9.92,0,,14.9,0,,31.23\n\
//!             END OF VARIABLES SECTION\n";
//!
//! let result = parse_text(text);
//! assert_eq!(result.rows.len(), 1);
//! assert_eq!(result.rows[0].latitude, "44.565");
//! ```

pub mod extractor;
pub mod segmenter;
pub mod stats;

#[cfg(test)]
pub mod tests;

use tracing::debug;

pub use extractor::{extract_rows, is_missing_value, is_valid_measurement};
pub use segmenter::{CastSegmenter, SegmenterState, segment_lines};
pub use stats::{ExtractionStats, ParseResult, SegmentStats};

/// Segment and extract a full line sequence
pub fn parse_lines<I, S>(lines: I) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (casts, segment_stats) = segment_lines(lines);
    let (rows, extraction_stats) = extract_rows(&casts);

    debug!(
        "Parsed {} casts into {} rows ({} measurements dropped, {} lines ignored)",
        casts.len(),
        rows.len(),
        extraction_stats.rows_dropped,
        segment_stats.lines_ignored
    );

    ParseResult {
        casts,
        rows,
        segment_stats,
        extraction_stats,
    }
}

/// Segment and extract the contents of a whole export
pub fn parse_text(text: &str) -> ParseResult {
    parse_lines(text.lines())
}
