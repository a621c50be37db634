//! Defines command-line interface options using `clap` for the par_stats application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use par_stats::datasets::DEFAULT_FILLER_LEN;
use par_stats::parallel::ParallelConfig;

/// Compare sequential and fork-join parallel reductions
#[derive(Parser, Debug)]
#[command(
    version,
    name = "par_stats",
    about = "Times min/max/sum/average and linear regression sequentially and in parallel"
)]
pub struct Args {
    /// Which demonstration to run
    #[arg(value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    /// Number of worker threads. Defaults to PAR_STATS_THREADS, then the number of CPU cores.
    #[arg(short = 't', long, value_parser = parse_threads)]
    pub threads: Option<usize>,

    /// Number of random filler values appended to the statistics dataset
    #[arg(long, default_value_t = DEFAULT_FILLER_LEN)]
    pub filler: usize,

    /// Seed for the filler values. Unseeded runs are not reproducible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the comparisons as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Min, max, sum and average over integers
    Stats,
    /// Least-squares line fit
    Regression,
    /// Both demonstrations
    All,
}

fn parse_threads(s: &str) -> Result<usize, String> {
    ParallelConfig::parse_threads(s).map_err(|e| e.to_string())
}
