mod cli;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use paintfill::{FillOutcome, flood_fill};
use std::process::ExitCode;

fn run(args: &cli::CliArgs) -> anyhow::Result<()> {
    let mut buffer = paintfill::io::read_image(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        buffer.width(),
        buffer.height()
    );

    let outcome = flood_fill(&mut buffer, args.seed(), args.color, &args.fill_options())
        .context("fill failed")?;
    match outcome {
        FillOutcome::Filled(stats) => info!(
            "filled {} pixels in {}x{} at ({}, {})",
            stats.pixels_filled,
            stats.bounds.width(),
            stats.bounds.height(),
            stats.bounds.min_x,
            stats.bounds.min_y
        ),
        FillOutcome::SeedIsBoundary => info!("seed is on an outline; image unchanged"),
        FillOutcome::AlreadyFilled => info!("seed already has the fill color; image unchanged"),
    }

    paintfill::io::write_image(&buffer, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
