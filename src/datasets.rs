//! Fixed demonstration inputs and filler generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// x-values of the regression demonstration
pub const REGRESSION_X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// y-values of the regression demonstration
pub const REGRESSION_Y: [f64; 5] = [2.0, 4.0, 5.0, 4.0, 5.0];

/// Deterministic prefix of the statistics demonstration
pub const STATISTICS_PREFIX: [i32; 13] = [1, 4, 8, 6, 9, 5, 3, 11, 22, 33, 44, 55, 66];
/// Number of filler values appended by default
pub const DEFAULT_FILLER_LEN: usize = 100_000;
/// Filler values are drawn from `0..FILLER_UPPER_BOUND`
pub const FILLER_UPPER_BOUND: i32 = 1000;

/// The literal prefix followed by `filler_len` values in `0..FILLER_UPPER_BOUND`.
///
/// Without a seed the filler comes from OS entropy and differs between runs;
/// only the prefix is reproducible.
pub fn statistics_series(filler_len: usize, seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut data = Vec::with_capacity(STATISTICS_PREFIX.len() + filler_len);
    data.extend_from_slice(&STATISTICS_PREFIX);
    data.extend((0..filler_len).map(|_| rng.random_range(0..FILLER_UPPER_BOUND)));
    data
}

/// `n` points on `y = slope * x + intercept` at `x = 0, 1, ..., n - 1`
#[allow(clippy::cast_precision_loss)]
pub fn line_points(slope: f64, intercept: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys = xs.iter().map(|&x| slope * x + intercept).collect();
    (xs, ys)
}
