//! Min, max, sum and average over a literal prefix plus random filler,
//! sequentially and in parallel.

use par_stats::datasets::DEFAULT_FILLER_LEN;
use par_stats::demo::run_statistics_demo;
use par_stats::parallel::ParallelConfig;
use par_stats::statistics::ParallelReducer;

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(error) = run() {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn run() -> par_stats::Result<()> {
    let config = ParallelConfig::from_env()?;
    let reducer = ParallelReducer::new(&config)?;

    for cmp in run_statistics_demo(&reducer, DEFAULT_FILLER_LEN, None) {
        cmp.print_timings();
    }
    Ok(())
}
