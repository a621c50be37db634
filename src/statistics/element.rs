//! Numeric element types accepted by the aggregators
//!
//! Both execution modes fold values with the operators defined here, so the
//! sequential baseline and the parallel reducer share combine semantics
//! without sharing scan code.

use std::fmt;
use std::ops::Add;

/// A value that can appear in a numeric series.
///
/// Sums accumulate into [`Element::Accum`], which is wider than the element
/// for integers so that realistic series cannot overflow and parallel sums
/// stay bit-exact with the sequential ones.
pub trait Element: Copy + PartialOrd + Send + Sync + fmt::Debug + fmt::Display + 'static {
    /// Accumulator used for sums
    type Accum: Copy
        + Add<Output = Self::Accum>
        + PartialEq
        + Send
        + Sync
        + fmt::Debug
        + fmt::Display;

    /// Result of `max` on an empty series
    const MIN_SENTINEL: Self;
    /// Result of `min` on an empty series
    const MAX_SENTINEL: Self;
    /// Additive identity of the accumulator
    const ZERO: Self::Accum;
    /// Integer arithmetic is exact, so parallel results must match bit for bit
    const IS_INTEGER: bool;

    fn widen(self) -> Self::Accum;
    fn accum_to_f64(acc: Self::Accum) -> f64;
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer_element {
    ($t:ty, $acc:ty) => {
        impl Element for $t {
            type Accum = $acc;

            const MIN_SENTINEL: Self = <$t>::MIN;
            const MAX_SENTINEL: Self = <$t>::MAX;
            const ZERO: $acc = 0;
            const IS_INTEGER: bool = true;

            #[inline]
            fn widen(self) -> $acc {
                <$acc>::from(self)
            }

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn accum_to_f64(acc: $acc) -> f64 {
                acc as f64
            }

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

macro_rules! impl_float_element {
    ($t:ty) => {
        impl Element for $t {
            type Accum = f64;

            const MIN_SENTINEL: Self = <$t>::NEG_INFINITY;
            const MAX_SENTINEL: Self = <$t>::INFINITY;
            const ZERO: f64 = 0.0;
            const IS_INTEGER: bool = false;

            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn accum_to_f64(acc: f64) -> f64 {
                acc
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_integer_element!(i32, i64);
impl_integer_element!(u32, u64);
impl_integer_element!(i64, i128);
impl_float_element!(f32);
impl_float_element!(f64);

/// Min combine operator. NaN never replaces the accumulator.
#[inline]
pub fn lesser<T: Element>(acc: T, value: T) -> T {
    if value < acc {
        value
    } else {
        acc
    }
}

/// Max combine operator. NaN never replaces the accumulator.
#[inline]
pub fn greater<T: Element>(acc: T, value: T) -> T {
    if value > acc {
        value
    } else {
        acc
    }
}
