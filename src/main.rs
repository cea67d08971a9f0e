use anyhow::Context;
use clap::Parser;
use ctd_processor::cli::{Args, setup_logging};
use ctd_processor::processor::CastProcessor;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
        process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = run(&args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("Processing interrupted by user"))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let processor = CastProcessor::new(args.input_path.clone(), args.output_path.clone())
        .with_context(|| format!("Cannot process {}", args.input_path.display()))?
        .with_config(args.to_config());

    processor
        .process()
        .await
        .context("Cast processing failed")?;

    Ok(())
}
