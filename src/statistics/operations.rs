//! Core statistical operations and traits
//!
//! This module defines the operation identifiers, result types and the
//! [`Aggregator`] trait implemented by both execution modes.

use super::element::Element;
use crate::errors::{ParStatsError, Result};

/// Relative tolerance for comparing floating-point results across modes
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Single-series statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Smallest value
    Min,
    /// Largest value
    Max,
    /// Sum of values
    Sum,
    /// Arithmetic mean
    Average,
}

impl StatOperation {
    /// All single-series statistics, in report order
    pub const ALL: [StatOperation; 4] = [Self::Min, Self::Max, Self::Sum, Self::Average];

    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "minimum",
            Self::Max => "maximum",
            Self::Sum => "sum",
            Self::Average => "average",
        }
    }
}

/// Any measured operation, including the two-series regression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Stat(StatOperation),
    Regression,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stat(op) => op.as_str(),
            Self::Regression => "linear regression",
        }
    }
}

impl From<StatOperation> for Operation {
    fn from(op: StatOperation) -> Self {
        Self::Stat(op)
    }
}

/// How an aggregator executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

impl ExecutionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// Fitted line `y = beta1 * x + beta0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCoefficients {
    /// Intercept
    pub beta0: f64,
    /// Slope
    pub beta1: f64,
}

impl RegressionCoefficients {
    /// Evaluate the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.beta1 * x + self.beta0
    }

    /// Either coefficient is NaN or infinite (zero x-variance)
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.beta0.is_finite() && self.beta1.is_finite())
    }
}

/// The four running sums behind the closed-form least-squares fit.
///
/// Partials built over disjoint slices combine with [`RegressionSums::merge`];
/// addition is associative so the two-level fold yields the same sums up to
/// floating-point reassociation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegressionSums {
    pub n: usize,
    pub sx: f64,
    pub sy: f64,
    pub sxy: f64,
    pub sx2: f64,
}

impl RegressionSums {
    #[inline]
    #[must_use]
    pub fn push(mut self, x: f64, y: f64) -> Self {
        self.n += 1;
        self.sx += x;
        self.sy += y;
        self.sxy += x * y;
        self.sx2 += x * x;
        self
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            n: self.n + other.n,
            sx: self.sx + other.sx,
            sy: self.sy + other.sy,
            sxy: self.sxy + other.sxy,
            sx2: self.sx2 + other.sx2,
        }
    }

    /// Solve for the coefficients.
    ///
    /// Zero x-variance makes the denominator exactly zero; the result is then
    /// NaN or infinite and is returned as-is.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coefficients(&self) -> RegressionCoefficients {
        let n = self.n as f64;
        let beta1 = (n * self.sxy - self.sx * self.sy) / (n * self.sx2 - self.sx * self.sx);
        let beta0 = (self.sy - beta1 * self.sx) / n;
        RegressionCoefficients { beta0, beta1 }
    }
}

/// Result of one reduction call, tagged by operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReductionResult<T: Element> {
    Min(T),
    Max(T),
    Sum(T::Accum),
    Average(f64),
    Regression(RegressionCoefficients),
}

impl<T: Element> ReductionResult<T> {
    /// The operation that produced this result
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Min(_) => Operation::Stat(StatOperation::Min),
            Self::Max(_) => Operation::Stat(StatOperation::Max),
            Self::Sum(_) => Operation::Stat(StatOperation::Sum),
            Self::Average(_) => Operation::Stat(StatOperation::Average),
            Self::Regression(_) => Operation::Regression,
        }
    }

    /// Whether two results of the same operation agree across execution modes.
    ///
    /// Integer min/max/sum must be identical. Real-valued results only need to
    /// agree within `rel_tol`, since partitioned summation reorders additions.
    #[must_use]
    pub fn agrees_with(&self, other: &Self, rel_tol: f64) -> bool {
        match (self, other) {
            (Self::Min(a), Self::Min(b)) | (Self::Max(a), Self::Max(b)) => {
                a == b || (!T::IS_INTEGER && approx_eq(a.to_f64(), b.to_f64(), rel_tol))
            }
            (Self::Sum(a), Self::Sum(b)) => {
                a == b
                    || (!T::IS_INTEGER
                        && approx_eq(T::accum_to_f64(*a), T::accum_to_f64(*b), rel_tol))
            }
            (Self::Average(a), Self::Average(b)) => approx_eq(*a, *b, rel_tol),
            (Self::Regression(a), Self::Regression(b)) => {
                approx_eq(a.beta0, b.beta0, rel_tol) && approx_eq(a.beta1, b.beta1, rel_tol)
            }
            _ => false,
        }
    }

    /// Human-readable value
    #[must_use]
    pub fn display_value(&self) -> String {
        match self {
            Self::Min(v) | Self::Max(v) => v.to_string(),
            Self::Sum(v) => v.to_string(),
            Self::Average(v) => format!("{v:.3}"),
            Self::Regression(c) => format!("beta0: {}, beta1: {}", c.beta0, c.beta1),
        }
    }

    /// JSON value for reports. Non-finite floats serialize as `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Min(v) | Self::Max(v) => serde_json::json!(v.to_f64()),
            Self::Sum(v) => serde_json::json!(T::accum_to_f64(*v)),
            Self::Average(v) => serde_json::json!(v),
            Self::Regression(c) => serde_json::json!({ "beta0": c.beta0, "beta1": c.beta1 }),
        }
    }
}

/// Relative comparison with an absolute floor of `rel_tol` near zero.
///
/// Equal infinities and two NaNs compare equal, so degenerate regressions
/// from both modes agree with each other.
#[must_use]
pub fn approx_eq(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel_tol * scale
}

/// Min/max/sum/average over a borrowed series, plus paired-series regression.
///
/// Implementations never copy or mutate the series. Empty input yields
/// `T::MAX_SENTINEL` for `min`, `T::MIN_SENTINEL` for `max` and zero for
/// `sum` and `average`.
pub trait Aggregator {
    /// Execution mode reported in timing samples
    fn mode(&self) -> ExecutionMode;

    fn min<T: Element>(&self, series: &[T]) -> T;

    fn max<T: Element>(&self, series: &[T]) -> T;

    fn sum<T: Element>(&self, series: &[T]) -> T::Accum;

    /// Mean of the series; `0.0` when empty
    #[allow(clippy::cast_precision_loss)]
    fn average<T: Element>(&self, series: &[T]) -> f64 {
        if series.is_empty() {
            return 0.0;
        }
        T::accum_to_f64(self.sum(series)) / series.len() as f64
    }

    /// Accumulate `Sx, Sy, Sxy, Sx2` over paired samples
    ///
    /// # Errors
    ///
    /// Returns [`ParStatsError::LengthMismatch`] if `xs` and `ys` differ in length.
    fn regression_sums<T: Element>(&self, xs: &[T], ys: &[T]) -> Result<RegressionSums>;

    /// Fit `y = beta1 * x + beta0` by least squares
    ///
    /// # Errors
    ///
    /// Returns [`ParStatsError::LengthMismatch`] if `xs` and `ys` differ in length.
    fn regress<T: Element>(&self, xs: &[T], ys: &[T]) -> Result<RegressionCoefficients> {
        Ok(self.regression_sums(xs, ys)?.coefficients())
    }

    /// Compute one single-series statistic as a tagged result
    fn reduce<T: Element>(&self, series: &[T], operation: StatOperation) -> ReductionResult<T> {
        match operation {
            StatOperation::Min => ReductionResult::Min(self.min(series)),
            StatOperation::Max => ReductionResult::Max(self.max(series)),
            StatOperation::Sum => ReductionResult::Sum(self.sum(series)),
            StatOperation::Average => ReductionResult::Average(self.average(series)),
        }
    }
}

pub(crate) fn check_paired(xs: usize, ys: usize) -> Result<()> {
    if xs == ys {
        Ok(())
    } else {
        Err(ParStatsError::LengthMismatch { xs, ys })
    }
}
