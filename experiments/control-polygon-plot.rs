// Sample a Bezier curve and draw it over its control polygon.
//
// Without arguments the reference control polygon is plotted to bezier_curve.png.

use bernstein_bezier::{pipeline, BezierResult, PlotConfig, SampledCurve};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about = "Plot a Bezier curve over its control polygon")]
struct Cli {
    /// JSON configuration file; the reference plot is drawn when omitted
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> BezierResult<(PlotConfig, SampledCurve)> {
    let config = match &cli.config {
        Some(path) => {
            info!("Reading configuration from {}", path.display());
            PlotConfig::from_json_file(path)?
        }
        None => PlotConfig::default(),
    };
    let sampled = pipeline::run(&config)?;
    Ok((config, sampled))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let start_time = Instant::now();
    match run(&cli) {
        Ok((config, sampled)) => {
            info!(
                "Plotted {} samples to {} in {:.2?}",
                sampled.len(),
                config.output.display(),
                start_time.elapsed()
            );
        }
        Err(e) => {
            error!("Plotting failed: {}", e);
            process::exit(1);
        }
    }
}
