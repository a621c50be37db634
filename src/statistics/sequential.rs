//! Single-pass sequential baseline
//!
//! Every operation is one left-to-right scan in the series' natural order, so
//! floating-point rounding is reproducible from run to run.

use super::element::{greater, lesser, Element};
use super::operations::{check_paired, Aggregator, ExecutionMode, RegressionSums};
use crate::errors::Result;

/// Sequential implementation of [`Aggregator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAggregator;

impl SequentialAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregator for SequentialAggregator {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }

    fn min<T: Element>(&self, series: &[T]) -> T {
        series.iter().fold(T::MAX_SENTINEL, |acc, &v| lesser(acc, v))
    }

    fn max<T: Element>(&self, series: &[T]) -> T {
        series.iter().fold(T::MIN_SENTINEL, |acc, &v| greater(acc, v))
    }

    fn sum<T: Element>(&self, series: &[T]) -> T::Accum {
        series.iter().fold(T::ZERO, |acc, &v| acc + v.widen())
    }

    fn regression_sums<T: Element>(&self, xs: &[T], ys: &[T]) -> Result<RegressionSums> {
        check_paired(xs.len(), ys.len())?;

        Ok(xs
            .iter()
            .zip(ys)
            .fold(RegressionSums::default(), |acc, (&x, &y)| {
                acc.push(x.to_f64(), y.to_f64())
            }))
    }
}
