//! Entry point for the par_stats application.
//! Handles CLI parsing, worker configuration, and dispatches the demonstrations.

use clap::Parser;
mod cli;

use cli::{Args, Demo};
use par_stats::demo::{run_regression_demo, run_statistics_demo};
use par_stats::errors::Result;
use par_stats::parallel::{get_parallel_info, ParallelConfig};
use par_stats::report::ReportWriter;
use par_stats::statistics::ParallelReducer;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(error) = run(args) {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    log::debug!("{args:#?}");

    println!(
        r#"
------------------------------------------------------------------
        par_stats: sequential vs. fork-join parallel reductions
------------------------------------------------------------------"#
    );

    // The worker count is fixed here, once, for the rest of the process
    let config = match args.threads {
        Some(threads) => ParallelConfig::with_threads(threads),
        None => ParallelConfig::from_env()?,
    };
    get_parallel_info(&config).print_info();

    let reducer = ParallelReducer::new(&config)?;
    let mut entries = Vec::new();

    if matches!(args.demo, Demo::Stats | Demo::All) {
        for cmp in run_statistics_demo(&reducer, args.filler, args.seed) {
            cmp.print_timings();
            entries.push(cmp.to_json());
        }
    }

    if matches!(args.demo, Demo::Regression | Demo::All) {
        let cmp = run_regression_demo(&reducer)?;
        cmp.print_regression();
        entries.push(cmp.to_json());
    }

    if let Some(output_path) = args.output {
        ReportWriter::new(&output_path).write_report(reducer.workers(), &entries)?;
        println!("✅ Saved report to {}", output_path.display());
    }

    Ok(())
}
