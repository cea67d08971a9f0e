//! Output writing for flattened CTD rows
//!
//! Builds a polars DataFrame with the fixed output column order and writes it
//! as CSV (values verbatim, header row) or Parquet (semantically typed
//! columns). An existing output file is never clobbered unless overwrite is
//! enabled; a timestamped sibling name is used instead.

use crate::config::{CompressionAlgorithm, CtdConfig, OutputFormat};
use crate::constants::{COLLISION_TIMESTAMP_FORMAT, OUTPUT_COLUMNS};
use crate::error::{CtdError, Result};
use crate::models::FlatRow;

use chrono::Local;
use polars::prelude::{
    Column, CsvWriter, DataFrame, DataType, IntoLazy, ParquetWriter as PolarsParquetWriter,
    SerWriter, col,
};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Columns stored as floating point in typed output
const FLOAT_COLUMNS: [&str; 5] = ["Latitude", "Longitude", "Depth", "Temperature", "Salinity"];

/// Columns stored as integers in typed output
const INTEGER_COLUMNS: [&str; 3] = ["Year", "Month", "Day"];

/// Result of a completed write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Path actually written, after collision handling
    pub path: PathBuf,
    pub rows_written: usize,
}

/// Row writer for the configured output format
#[derive(Debug, Clone)]
pub struct RowWriter {
    output_path: PathBuf,
    format: OutputFormat,
    compression: CompressionAlgorithm,
    overwrite: bool,
}

impl RowWriter {
    /// Create a new row writer
    pub fn new(output_path: PathBuf, config: &CtdConfig) -> Self {
        Self {
            output_path,
            format: config.output_format,
            compression: config.compression,
            overwrite: config.overwrite,
        }
    }

    /// Path the next write will target
    pub fn resolve_output_path(&self) -> PathBuf {
        if self.overwrite || !self.output_path.exists() {
            return self.output_path.clone();
        }

        let stamp = Local::now().format(COLLISION_TIMESTAMP_FORMAT).to_string();
        let renamed = timestamped_path(&self.output_path, &stamp);
        debug!(
            "Output {} exists, writing to {} instead",
            self.output_path.display(),
            renamed.display()
        );
        renamed
    }

    /// Write all rows to the output file
    pub fn write(&self, rows: &[FlatRow]) -> Result<WriteSummary> {
        let path = self.resolve_output_path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let df = rows_to_dataframe(rows)?;

        match self.format {
            OutputFormat::Csv => self.write_csv(df, &path)?,
            OutputFormat::Parquet => self.write_parquet(df, &path)?,
        }

        info!("Wrote {} rows to {}", rows.len(), path.display());

        Ok(WriteSummary {
            path,
            rows_written: rows.len(),
        })
    }

    fn write_csv(&self, mut df: DataFrame, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| CtdError::write_failed(path, format!("Failed to write csv: {}", e)))
    }

    fn write_parquet(&self, df: DataFrame, path: &Path) -> Result<()> {
        let mut typed = with_semantic_types(df)?;
        let file = File::create(path)?;

        PolarsParquetWriter::new(file)
            .with_compression(self.compression.to_polars_compression())
            .finish(&mut typed)
            .map_err(|e| {
                CtdError::write_failed(path, format!("Failed to write parquet: {}", e))
            })?;

        Ok(())
    }
}

/// Build a string-typed DataFrame in output column order.
///
/// Empty values are stored as null so CSV output leaves the field blank
/// instead of writing a quoted empty string.
pub fn rows_to_dataframe(rows: &[FlatRow]) -> Result<DataFrame> {
    let columns: Vec<Column> = OUTPUT_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values: Vec<Option<&str>> = rows
                .iter()
                .map(|row| Some(row.fields()[index]).filter(|value| !value.is_empty()))
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Cast coordinates and measurements to Float64 and date parts to Int32.
///
/// Values that do not parse (such as metadata absent from a cast) become null.
pub fn with_semantic_types(df: DataFrame) -> Result<DataFrame> {
    let casts = FLOAT_COLUMNS
        .iter()
        .map(|name| col(*name).cast(DataType::Float64))
        .chain(
            INTEGER_COLUMNS
                .iter()
                .map(|name| col(*name).cast(DataType::Int32)),
        )
        .collect::<Vec<_>>();

    Ok(df.lazy().with_columns(casts).collect()?)
}

/// Insert `_<stamp>` between the file stem and its extension
pub fn timestamped_path(path: &Path, stamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };

    path.with_file_name(file_name)
}
