//! Shows how long each benchmarked executable took to render the
//! mandelbrot set, for every image size it was measured at.
//!
//! # Usage
//!
//! Run it from the directory holding `benchmark.csv`:
//!
//! ```shell
//! $ bench-plot
//! ```
//!
//! The file needs a leading index column followed by at least the
//! `size`, `time` and `executable` columns. A different file can be given
//! as the first argument. The chart window stays open until it is closed.

mod benchmark_reader;
mod chart;
mod error;
mod visualizer;

use clap::Parser;
use env_logger::Env;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use chart::BenchmarkChart;
use error::PlotError;

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// The benchmark results to plot.
    #[arg(default_value = "benchmark.csv")]
    pub input: PathBuf,
    /// The log level of the application.
    #[arg(short, long, default_value = "error")]
    pub log_level: String,
}

/// Loads the benchmark results and shows them until the window is closed.
fn run(args: &Args) -> Result<(), PlotError> {
    let records = benchmark_reader::read(&args.input)?;
    let chart = BenchmarkChart::from_records(&records);
    visualizer::render_plot(chart)
}

/// Main endpoint for the executable.
fn main() -> ExitCode {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or("BENCH_PLOT_LOG_LEVEL", args.log_level.clone());
    let _ = env_logger::try_init_from_env(env);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
