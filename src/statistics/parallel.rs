//! Fork-join parallel reductions
//!
//! The index range `[0, n)` is split into `W` contiguous slices of
//! `ceil(n / W)` elements. Each slice is folded on the reducer's thread pool
//! into a private partial; the partials are collected (the join) and then
//! combined on the calling thread with the same operator the sequential
//! baseline uses. No worker ever writes shared state.
//!
//! The pool is built once per reducer and reused across calls, so a
//! thread-creation failure surfaces from [`ParallelReducer::new`] rather than
//! from the reductions themselves.

use super::element::{greater, lesser, Element};
use super::operations::{check_paired, Aggregator, ExecutionMode, RegressionSums};
use crate::errors::Result;
use crate::parallel::ParallelConfig;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Parallel implementation of [`Aggregator`] backed by a dedicated pool
#[derive(Debug)]
pub struct ParallelReducer {
    pool: ThreadPool,
    workers: usize,
}

impl ParallelReducer {
    /// Build a reducer with its own pool of `config.worker_count()` threads
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ParStatsError::ThreadPoolError`] if the pool
    /// cannot be started, or `InvalidConfig` for an explicit zero worker count.
    /// There is no fallback to sequential execution.
    pub fn new(config: &ParallelConfig) -> Result<Self> {
        let pool = config.build_pool()?;
        let workers = pool.current_num_threads();
        log::info!("parallel reducer ready with {} workers", workers);
        Ok(Self { pool, workers })
    }

    /// Number of slices each series is split into
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Length of every slice but possibly the last
    pub fn slice_len(&self, n: usize) -> usize {
        n.div_ceil(self.workers).max(1)
    }

    /// Fold each slice privately, join, then combine the partials.
    ///
    /// `identity` is returned untouched for an empty series, without
    /// dispatching any work to the pool.
    fn fold_partitioned<T, A, F, C>(&self, series: &[T], identity: A, fold: F, combine: C) -> A
    where
        T: Element,
        A: Copy + Send,
        F: Fn(&[T]) -> A + Sync,
        C: Fn(A, A) -> A,
    {
        if series.is_empty() {
            return identity;
        }

        let slice_len = self.slice_len(series.len());
        let partials: Vec<A> = self
            .pool
            .install(|| series.par_chunks(slice_len).map(&fold).collect());

        partials.into_iter().fold(identity, combine)
    }
}

impl Aggregator for ParallelReducer {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn min<T: Element>(&self, series: &[T]) -> T {
        self.fold_partitioned(
            series,
            T::MAX_SENTINEL,
            |slice| slice.iter().fold(T::MAX_SENTINEL, |acc, &v| lesser(acc, v)),
            lesser,
        )
    }

    fn max<T: Element>(&self, series: &[T]) -> T {
        self.fold_partitioned(
            series,
            T::MIN_SENTINEL,
            |slice| slice.iter().fold(T::MIN_SENTINEL, |acc, &v| greater(acc, v)),
            greater,
        )
    }

    fn sum<T: Element>(&self, series: &[T]) -> T::Accum {
        self.fold_partitioned(
            series,
            T::ZERO,
            |slice| slice.iter().fold(T::ZERO, |acc, &v| acc + v.widen()),
            |a: T::Accum, b: T::Accum| a + b,
        )
    }

    /// All four sums come from one pass over aligned `xs`/`ys` slices cut by
    /// the same partition.
    fn regression_sums<T: Element>(&self, xs: &[T], ys: &[T]) -> Result<RegressionSums> {
        check_paired(xs.len(), ys.len())?;

        if xs.is_empty() {
            return Ok(RegressionSums::default());
        }

        let slice_len = self.slice_len(xs.len());
        let partials: Vec<RegressionSums> = self.pool.install(|| {
            xs.par_chunks(slice_len)
                .zip(ys.par_chunks(slice_len))
                .map(|(x_slice, y_slice)| {
                    x_slice
                        .iter()
                        .zip(y_slice)
                        .fold(RegressionSums::default(), |acc, (&x, &y)| {
                            acc.push(x.to_f64(), y.to_f64())
                        })
                })
                .collect()
        });

        Ok(partials
            .into_iter()
            .fold(RegressionSums::default(), RegressionSums::merge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::sequential::SequentialAggregator;

    fn reducer(workers: usize) -> ParallelReducer {
        ParallelReducer::new(&ParallelConfig::with_threads(workers)).unwrap()
    }

    #[test]
    fn test_slice_len_covers_series() {
        let r = reducer(4);
        assert_eq!(r.workers(), 4);
        assert_eq!(r.slice_len(13), 4);
        assert_eq!(r.slice_len(16), 4);
        assert_eq!(r.slice_len(3), 1);
    }

    #[test]
    fn test_parallel_matches_sequential_integers() {
        let data: Vec<i32> = (0..10_007).map(|i| (i * 7919) % 1000 - 500).collect();
        let seq = SequentialAggregator::new();

        for workers in [1, 2, 3, 8] {
            let par = reducer(workers);
            assert_eq!(par.min(&data), seq.min(&data));
            assert_eq!(par.max(&data), seq.max(&data));
            assert_eq!(par.sum(&data), seq.sum(&data));
        }
    }

    #[test]
    fn test_more_workers_than_elements() {
        let par = reducer(8);
        let data = [5_i32, -2, 9];
        assert_eq!(par.min(&data), -2);
        assert_eq!(par.max(&data), 9);
        assert_eq!(par.sum(&data), 12);
    }

    #[test]
    fn test_parallel_empty_series() {
        let par = reducer(2);
        let empty: [f64; 0] = [];
        assert_eq!(par.min(&empty), f64::INFINITY);
        assert_eq!(par.max(&empty), f64::NEG_INFINITY);
        assert_eq!(par.sum(&empty), 0.0);
        assert_eq!(par.average(&empty), 0.0);
    }

    #[test]
    fn test_parallel_regression() {
        let par = reducer(3);
        let sums = par
            .regression_sums(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(sums.n, 5);
        assert_eq!(sums.sx, 15.0);
        assert_eq!(sums.sy, 20.0);
        assert_eq!(sums.sxy, 66.0);
        assert_eq!(sums.sx2, 55.0);

        let coeffs = sums.coefficients();
        assert!((coeffs.beta1 - 0.6).abs() < 1e-9);
        assert!((coeffs.beta0 - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_regression_length_mismatch() {
        let par = reducer(2);
        assert!(par.regress(&[1.0], &[1.0, 2.0]).is_err());
    }
}
