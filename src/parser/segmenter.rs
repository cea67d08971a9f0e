//! Cast segmentation state machine
//!
//! Splits the line stream of a CTD export into [`CastRecord`]s. A cast starts
//! at every section delimiter line; its header lines carry `key, unit, value`
//! metadata, and the lines between the `VARIABLES` and
//! `END OF VARIABLES SECTION` markers carry positional measurements.
//!
//! The segmenter is permissive: lines that do not fit the expected shape are
//! counted and dropped, never reported as errors.

use tracing::trace;

use super::stats::SegmentStats;
use crate::constants::{
    END_OF_VARIABLES_MARKER, METADATA_VALUE_INDEX, SECTION_DELIMITER, VARIABLES_MARKER,
    variable_columns,
};
use crate::models::{CastRecord, RawMeasurement};

/// Position of the segmenter within the export layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmenterState {
    /// No delimiter seen yet; lines are ignored
    #[default]
    NoActiveCast,
    /// Collecting metadata for the active cast
    InMetadata,
    /// Collecting measurement lines for the active cast
    InVariables,
}

/// Incremental cast segmenter.
///
/// Feed lines with [`push_line`](Self::push_line); a completed cast is handed
/// back as soon as the next delimiter closes it. Call
/// [`finish`](Self::finish) at end of input to flush the last cast.
#[derive(Debug, Default)]
pub struct CastSegmenter {
    state: SegmenterState,
    current: Option<CastRecord>,
    stats: SegmentStats,
}

impl CastSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SegmenterState {
        self.state
    }

    pub fn stats(&self) -> &SegmentStats {
        &self.stats
    }

    /// Consume one line, returning the previous cast if this line closed it
    pub fn push_line(&mut self, line: &str) -> Option<CastRecord> {
        self.stats.lines_read += 1;

        // The delimiter wins in every state, including mid-variables
        if line.starts_with(SECTION_DELIMITER) {
            let finished = self.current.replace(CastRecord::new());
            self.state = SegmenterState::InMetadata;
            return finished;
        }

        match self.state {
            SegmenterState::NoActiveCast => self.stats.lines_ignored += 1,
            SegmenterState::InMetadata => self.metadata_line(line),
            SegmenterState::InVariables => self.variables_line(line),
        }

        None
    }

    /// Flush the active cast at end of input
    pub fn finish(mut self) -> (Option<CastRecord>, SegmentStats) {
        (self.current.take(), self.stats)
    }

    fn metadata_line(&mut self, line: &str) {
        if line.contains(VARIABLES_MARKER) {
            self.state = SegmenterState::InVariables;
            return;
        }

        let parts = split_trimmed(line);
        match (parts.first(), parts.get(METADATA_VALUE_INDEX)) {
            (Some(key), Some(value)) if !value.is_empty() => {
                if let Some(cast) = self.current.as_mut() {
                    cast.metadata.insert(key.to_string(), value.to_string());
                    self.stats.metadata_entries += 1;
                }
            }
            _ => {
                trace!("Ignoring metadata line: {:?}", line);
                self.stats.lines_ignored += 1;
            }
        }
    }

    fn variables_line(&mut self, line: &str) {
        if line.contains(END_OF_VARIABLES_MARKER) {
            self.state = SegmenterState::InMetadata;
            return;
        }

        let parts = split_trimmed(line);
        if parts.len() <= variable_columns::MIN_FIELDS_EXCLUSIVE {
            trace!("Ignoring short variables line: {:?}", line);
            self.stats.lines_ignored += 1;
            return;
        }

        // Positions past the end of a short line read as empty and are
        // rejected later by the row extractor
        let field = |index: usize| parts.get(index).copied().unwrap_or("");
        let measurement = RawMeasurement::new(
            field(variable_columns::DEPTH),
            field(variable_columns::TEMPERATURE),
            field(variable_columns::SALINITY),
        );

        if let Some(cast) = self.current.as_mut() {
            cast.variables.push(measurement);
            self.stats.measurement_lines += 1;
        }
    }
}

/// Segment a complete line sequence into casts
pub fn segment_lines<I, S>(lines: I) -> (Vec<CastRecord>, SegmentStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = CastSegmenter::new();
    let mut casts = Vec::new();

    for line in lines {
        if let Some(cast) = segmenter.push_line(line.as_ref()) {
            casts.push(cast);
        }
    }

    let (last, stats) = segmenter.finish();
    casts.extend(last);

    (casts, stats)
}

fn split_trimmed(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
