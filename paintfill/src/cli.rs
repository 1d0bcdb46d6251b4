//! Command-line arguments for the `paintfill` binary

use clap::Parser;
use paintfill::{DEFAULT_TOLERANCE, FillOptions, Rgba, SeedPoint};
use std::path::PathBuf;

/// Flood fill a region of a PNG image, like a paint bucket.
#[derive(Parser, Debug)]
#[command(
    name = "paintfill",
    version,
    about,
    long_about = "Recolor the 4-connected region around a seed pixel whose colors are\n\
                  within a tolerance of the seed's color. Opaque near-black pixels act\n\
                  as outlines the fill never crosses.\n\n\
                  Example:\n  \
                  paintfill sketch.png filled.png --x 120 --y 80 --color #3080ff"
)]
pub struct CliArgs {
    /// PNG image to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// PNG file to write the result to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Seed column, in image pixels
    #[arg(long)]
    pub x: u32,

    /// Seed row, in image pixels
    #[arg(long)]
    pub y: u32,

    /// Fill color as #RRGGBB or #RRGGBBAA
    #[arg(short, long, default_value = "#ff0000", value_name = "HEX")]
    pub color: Rgba,

    /// Maximum per-channel difference from the seed color
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u32,

    /// Logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn seed(&self) -> SeedPoint {
        SeedPoint::new(self.x, self.y)
    }

    pub fn fill_options(&self) -> FillOptions {
        FillOptions::default().with_tolerance(self.tolerance)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
