//! Error handling for CTD processing operations.
//!
//! The parsing core never fails on bad data; these errors cover the file
//! layer around it: discovery, reading, configuration and output writing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No input files matching '{pattern}' found in: {path}")]
    NoInputFiles { path: PathBuf, pattern: String },

    #[error("Failed to read cast file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path} - {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Directory traversal failed: {0}")]
    Discovery(#[from] walkdir::Error),
}

impl CtdError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a write failure for the given output path
    pub fn write_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CtdError>;
