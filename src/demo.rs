//! The two sequential-vs-parallel demonstrations
//!
//! Inputs are built before any timer starts; each aggregator call is timed on
//! its own.

use crate::datasets::{self, REGRESSION_X, REGRESSION_Y};
use crate::errors::Result;
use crate::report::Comparison;
use crate::statistics::{
    Aggregator, Element, Operation, ParallelReducer, ReductionResult, SequentialAggregator,
    StatOperation, DEFAULT_TOLERANCE,
};
use crate::timing::{Timer, TimingSample};

/// Time one statistic on one aggregator
pub fn measure_stat<A, T>(
    aggregator: &A,
    series: &[T],
    operation: StatOperation,
) -> (ReductionResult<T>, TimingSample)
where
    A: Aggregator,
    T: Element,
{
    Timer::measure(operation.into(), aggregator.mode(), || {
        aggregator.reduce(series, operation)
    })
}

/// Time a regression fit on one aggregator
///
/// # Errors
///
/// Propagates a length mismatch between `xs` and `ys`.
pub fn measure_regression<A, T>(
    aggregator: &A,
    xs: &[T],
    ys: &[T],
) -> Result<(ReductionResult<T>, TimingSample)>
where
    A: Aggregator,
    T: Element,
{
    let (coefficients, timing) =
        Timer::measure(Operation::Regression, aggregator.mode(), || {
            aggregator.regress(xs, ys)
        });
    Ok((ReductionResult::Regression(coefficients?), timing))
}

/// Run min, max, sum and average in both modes
pub fn compare_statistics<T: Element>(
    sequential: &SequentialAggregator,
    parallel: &ParallelReducer,
    series: &[T],
) -> Vec<Comparison<T>> {
    StatOperation::ALL
        .iter()
        .map(|&operation| {
            let cmp = Comparison::new(
                measure_stat(sequential, series, operation),
                measure_stat(parallel, series, operation),
            );
            warn_on_disagreement(&cmp);
            cmp
        })
        .collect()
}

/// Fit the regression in both modes
///
/// # Errors
///
/// Propagates a length mismatch between `xs` and `ys`.
pub fn compare_regression<T: Element>(
    sequential: &SequentialAggregator,
    parallel: &ParallelReducer,
    xs: &[T],
    ys: &[T],
) -> Result<Comparison<T>> {
    let cmp = Comparison::new(
        measure_regression(sequential, xs, ys)?,
        measure_regression(parallel, xs, ys)?,
    );
    warn_on_disagreement(&cmp);
    Ok(cmp)
}

/// Statistics demonstration over the literal prefix plus random filler
pub fn run_statistics_demo(
    parallel: &ParallelReducer,
    filler_len: usize,
    seed: Option<u64>,
) -> Vec<Comparison<i32>> {
    let data = datasets::statistics_series(filler_len, seed);
    log::info!(
        "statistics demo over {} values ({} filler, seed {:?})",
        data.len(),
        filler_len,
        seed
    );
    compare_statistics(&SequentialAggregator::new(), parallel, &data)
}

/// Regression demonstration over the fixed five-point dataset
///
/// # Errors
///
/// Only fails if the fixed dataset were malformed.
pub fn run_regression_demo(parallel: &ParallelReducer) -> Result<Comparison<f64>> {
    log::info!("regression demo over {} points", REGRESSION_X.len());
    compare_regression(
        &SequentialAggregator::new(),
        parallel,
        &REGRESSION_X,
        &REGRESSION_Y,
    )
}

fn warn_on_disagreement<T: Element>(cmp: &Comparison<T>) {
    if !cmp.results_agree(DEFAULT_TOLERANCE) {
        log::warn!(
            "{}: sequential {} and parallel {} disagree",
            cmp.operation.as_str(),
            cmp.sequential.display_value(),
            cmp.parallel.display_value()
        );
    }
}
