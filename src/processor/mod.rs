//! Main processing engine.
//!
//! Orchestrates the complete cast conversion workflow using specialized
//! modules for input discovery, file loading and row writing.

pub mod discovery;
pub mod loader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::FileDiscovery, loader::load_cast_file, writer::RowWriter};

use crate::config::{CtdConfig, OutputFormat};
use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_STEM};
use crate::error::{CtdError, Result};
use crate::models::{FlatRow, ProcessingStats};
use crate::parser::ParseResult;

use colored::*;
use futures::stream::{self, StreamExt, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, warn};

/// Main processor for cast export conversion
#[derive(Debug)]
pub struct CastProcessor {
    input_path: PathBuf,
    output_path: Option<PathBuf>,
    config: CtdConfig,
}

impl CastProcessor {
    /// Create a new processor for a cast file or a directory of cast files
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>) -> Result<Self> {
        if !input_path.exists() {
            return Err(CtdError::InputNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            output_path,
            config: CtdConfig::default(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: CtdConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CtdConfig {
        &self.config
    }

    /// Output path, defaulting to `parsed/parsed_data.<ext>` beside the input
    pub fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(&self.input_path, self.config.output_format),
        }
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        let output_path = self.output_path();
        self.announce(&output_path);

        // Step 1: Discover cast files
        let files = self.discover_inputs(&output_path)?;
        info!("Processing {} cast files", files.len());
        if self.config.show_progress {
            println!(
                "  {} {} cast files",
                "Found".bright_green(),
                files.len().to_string().bright_white().bold()
            );
        }

        // Step 2: Parse files, results kept in input order
        let results = self.parse_files(&files).await?;

        let mut stats = ProcessingStats::default();
        let mut rows: Vec<FlatRow> = Vec::new();
        for result in results {
            stats.record_parse(&result);
            rows.extend(result.rows);
        }

        if rows.is_empty() {
            warn!(
                "No valid rows extracted from {} casts",
                stats.casts_parsed
            );
        }

        // Step 3: Write output unless only a summary was requested
        if self.config.summary_only {
            debug!("Summary only mode, skipping output");
        } else {
            let writer = RowWriter::new(output_path.clone(), &self.config);
            let summary = task::spawn_blocking(move || writer.write(&rows))
                .await
                .map_err(|e| {
                    CtdError::write_failed(
                        output_path.clone(),
                        format!("Writer task failed: {}", e),
                    )
                })??;
            stats.output_path = Some(summary.path);
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        self.report(&stats);

        Ok(stats)
    }

    /// Discover inputs, leaving out files written by earlier runs
    fn discover_inputs(&self, output_path: &Path) -> Result<Vec<PathBuf>> {
        let discovery = FileDiscovery::new(
            self.input_path.clone(),
            &self.config.file_pattern,
            self.config.recursive,
        )?;
        let mut files = discovery.discover()?;

        if self.input_path.is_dir() {
            files = without_output_files(files, &self.input_path, output_path);
        }

        if files.is_empty() {
            return Err(CtdError::NoInputFiles {
                path: self.input_path.clone(),
                pattern: self.config.file_pattern.clone(),
            });
        }

        Ok(files)
    }

    /// Load and parse files concurrently; the first read failure aborts
    async fn parse_files(&self, files: &[PathBuf]) -> Result<Vec<ParseResult>> {
        let progress = if self.config.show_progress {
            create_progress_bar(files.len() as u64, "Parsing casts")
        } else {
            ProgressBar::hidden()
        };

        let results = stream::iter(files.iter().cloned())
            .map(|path| async move { load_cast_file(&path).await })
            .buffered(self.config.max_concurrent_files)
            .inspect(|_| progress.inc(1))
            .try_collect::<Vec<_>>()
            .await;

        progress.finish_and_clear();
        results
    }

    fn announce(&self, output_path: &Path) {
        if !self.config.show_progress {
            return;
        }

        println!("{}", "Starting CTD cast processing".bright_green().bold());
        println!(
            "  {} {}",
            "Input:".bright_cyan(),
            self.input_path.display()
        );
        if self.config.summary_only {
            println!("  {} {}", "Output:".bright_cyan(), "none (summary only)");
        } else {
            println!("  {} {}", "Output:".bright_cyan(), output_path.display());
        }
    }

    fn report(&self, stats: &ProcessingStats) {
        info!(
            "Processed {} files: {} casts, {} rows, {} dropped",
            stats.files_processed, stats.casts_parsed, stats.rows_emitted, stats.rows_dropped
        );

        if !self.config.show_progress {
            return;
        }

        println!("\n{}", "Processing Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Files processed:".bright_cyan(),
            stats.files_processed.to_string().bright_white()
        );
        println!(
            "  {} {} ({} without measurements)",
            "Casts parsed:".bright_cyan(),
            stats.casts_parsed.to_string().bright_white(),
            stats.empty_casts
        );
        println!(
            "  {} {} of {} ({:.1}%)",
            "Rows kept:".bright_cyan(),
            stats.rows_emitted.to_string().bright_white().bold(),
            stats.measurements_seen,
            stats.retention_rate()
        );
        if stats.rows_dropped > 0 {
            println!(
                "  {} {}",
                "Rows dropped:".bright_yellow(),
                stats.rows_dropped.to_string().bright_yellow()
            );
        }
        if let Some(path) = &stats.output_path {
            println!(
                "  {} {}",
                "Written to:".bright_cyan(),
                path.display().to_string().bright_white()
            );
        }
    }
}

/// Default output location for an input path
pub fn default_output_path(input_path: &Path, format: OutputFormat) -> PathBuf {
    let base = if input_path.is_dir() {
        input_path
    } else {
        input_path.parent().unwrap_or_else(|| Path::new("."))
    };

    base.join(DEFAULT_OUTPUT_DIR)
        .join(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
}

/// Drop earlier outputs from a directory listing.
///
/// The output file itself is always removed. Files under the output
/// directory are removed only when that directory sits strictly inside
/// `input_dir`. Paths are compared as given, without canonicalizing.
pub fn without_output_files(
    files: Vec<PathBuf>,
    input_dir: &Path,
    output_path: &Path,
) -> Vec<PathBuf> {
    let nested_output_dir = output_path
        .parent()
        .filter(|dir| *dir != input_dir && dir.starts_with(input_dir));

    files
        .into_iter()
        .filter(|file| file.as_path() != output_path)
        .filter(|file| nested_output_dir.is_none_or(|dir| !file.starts_with(dir)))
        .collect()
}

fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
