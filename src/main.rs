mod dispatch;
mod error;
mod formulas;
mod input;
mod report;
mod workout;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::dispatch::read_package;
use crate::input::{SensorPackage, load_packages};
use crate::report::Summary;

/// Workout statistics calculator for running, sports walking and swimming.
#[derive(Parser, Debug)]
#[command(name = "fitstat")]
#[command(about = "Computes distance, mean speed and calories from raw sensor packages")]
#[command(version)]
struct Args {
    /// Path to a sensor package file (one `CODE n n n...` package per line).
    /// Can also be set via FITSTAT_FILE environment variable.
    /// Without it, the built-in demo packages are processed.
    #[arg(value_name = "FILE", env = "FITSTAT_FILE")]
    file: Option<PathBuf>,

    /// Output format for the per-workout summaries.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// The fixed human-readable message template.
    #[default]
    Text,
    /// One JSON object per summary.
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    let packages = match &args.file {
        Some(path) => {
            log::info!("loading sensor packages from {}", path.display());
            load_packages(path)
                .with_context(|| format!("failed to load packages from {}", path.display()))?
        }
        None => {
            log::info!("no package file given, using built-in demo packages");
            demo_packages()
        }
    };

    for package in &packages {
        let workout = read_package(&package.code, &package.params)
            .with_context(|| format!("bad sensor package on line {}", package.line))?;

        print_summary(&workout.summary(), args.format)?;
    }

    Ok(())
}

/// Prints one summary to stdout in the selected format.
fn print_summary(summary: &Summary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", summary),
        OutputFormat::Json => {
            let json = serde_json::to_string(summary).context("failed to serialize summary")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// The sensor packages processed when no file is given.
fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage {
            code: "SWM".to_string(),
            params: vec![720.0, 1.0, 80.0, 25.0, 40.0],
            line: 1,
        },
        SensorPackage {
            code: "RUN".to_string(),
            params: vec![15000.0, 1.0, 75.0],
            line: 2,
        },
        SensorPackage {
            code: "WLK".to_string(),
            params: vec![9000.0, 1.0, 75.0, 180.0],
            line: 3,
        },
    ]
}
