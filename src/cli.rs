//! Command-line interface components.

use crate::config::{CompressionAlgorithm, CtdConfig, OutputFormat};
use crate::constants::DEFAULT_FILE_PATTERN;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ctd-processor")]
#[command(about = "Convert CTD cast exports into flat depth/temperature/salinity tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Cast export file, or a directory of cast exports
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output file (defaults to parsed/parsed_data.<format> beside the input)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Output format (csv, parquet)
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long, default_value = "snappy")]
    pub compression: CompressionAlgorithm,

    /// File name pattern used when INPUT is a directory
    #[arg(long, default_value = DEFAULT_FILE_PATTERN)]
    pub pattern: String,

    /// Search subdirectories of INPUT
    #[arg(short, long)]
    pub recursive: bool,

    /// Maximum number of files loaded concurrently
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Parse and report statistics without writing output
    #[arg(long)]
    pub summary_only: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    /// Build the processing configuration from the arguments
    pub fn to_config(&self) -> CtdConfig {
        let mut config = CtdConfig::default()
            .with_file_pattern(&self.pattern)
            .with_output_format(self.format)
            .with_compression(self.compression);

        if let Some(max_files) = self.max_concurrent {
            config = config.with_max_concurrent_files(max_files);
        }
        if self.recursive {
            config = config.with_recursive();
        }
        if self.overwrite {
            config = config.with_overwrite();
        }
        if self.summary_only {
            config = config.with_summary_only();
        }
        if self.quiet {
            config = config.without_progress();
        }

        config
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ctd_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
