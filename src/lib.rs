//! CTD Processor Library
//!
//! Converts CTD (conductivity, temperature, depth) cast exports into a flat
//! table with one row per measurement, each row carrying its cast's position
//! and date.
//!
//! This library provides tools for:
//! - Segmenting an export into per-cast metadata and measurement lines
//! - Extracting depth, temperature and salinity rows with missing values dropped
//! - Discovering and loading cast files concurrently
//! - Writing the rows as CSV or Parquet

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;

// Re-export commonly used types
pub use config::{CompressionAlgorithm, CtdConfig, OutputFormat};
pub use error::{CtdError, Result};
pub use models::{CastRecord, FlatRow, ProcessingStats, RawMeasurement};
pub use parser::{ParseResult, parse_lines, parse_text};
pub use processor::CastProcessor;
