//! Fits y = beta1*x + beta0 to five fixed points sequentially and in parallel.

use par_stats::demo::run_regression_demo;
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

    run_regression_demo(&reducer)?.print_regression();
    Ok(())
}
