//! Configuration management and validation.
//!
//! Provides the processing configuration for input discovery, concurrent
//! loading and output writing.

use crate::constants::DEFAULT_FILE_PATTERN;
use crate::error::{CtdError, Result};
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output file formats for flattened rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Delimited text with a header row, values written verbatim
    #[default]
    Csv,
    /// Typed columnar output
    Parquet,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CtdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "parquet" => Ok(OutputFormat::Parquet),
            other => Err(CtdError::configuration(format!(
                "Unknown output format '{}' (expected csv or parquet)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    #[default]
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = CtdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(CtdError::configuration(format!(
                "Unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Global configuration for CTD processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtdConfig {
    /// File name pattern for directory inputs
    pub file_pattern: String,

    /// Descend into subdirectories of a directory input
    pub recursive: bool,

    /// Maximum number of cast files loaded concurrently
    pub max_concurrent_files: usize,

    /// Output file format
    pub output_format: OutputFormat,

    /// Parquet compression (ignored for CSV)
    pub compression: CompressionAlgorithm,

    /// Replace an existing output file instead of writing a timestamped sibling
    pub overwrite: bool,

    /// Parse and report statistics without writing output
    pub summary_only: bool,

    /// Show progress bar and coloured summary
    pub show_progress: bool,
}

impl Default for CtdConfig {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            recursive: false,
            max_concurrent_files: num_cpus::get().max(1),
            output_format: OutputFormat::default(),
            compression: CompressionAlgorithm::default(),
            overwrite: false,
            summary_only: false,
            show_progress: true,
        }
    }
}

impl CtdConfig {
    /// Set the file name pattern used for directory inputs
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Enable recursive directory discovery
    pub fn with_recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set parquet compression
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Overwrite existing output files
    pub fn with_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Enable summary only mode
    pub fn with_summary_only(mut self) -> Self {
        self.summary_only = true;
        self
    }

    /// Disable progress bar and coloured output
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check the configuration for values the processor cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_files == 0 {
            return Err(CtdError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }

        glob::Pattern::new(&self.file_pattern).map_err(|e| {
            CtdError::configuration(format!(
                "Invalid file pattern '{}': {}",
                self.file_pattern, e
            ))
        })?;

        Ok(())
    }
}
