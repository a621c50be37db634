//! Statistical computations and reduction operations
//!
//! This module provides min, max, sum, average and least-squares regression
//! over borrowed numeric series, in two execution modes that share combine
//! semantics.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`element`]: Numeric element types and the min/max combine operators
//! - [`operations`]: Operation identifiers, result types and the [`Aggregator`] trait
//! - [`sequential`]: Single-pass baseline
//! - [`parallel`]: Fork-join reducer on a dedicated thread pool

pub mod element;
pub mod operations;
pub mod parallel;
pub mod sequential;

// Re-export the main types for convenience
pub use element::Element;
pub use operations::{
    approx_eq, Aggregator, ExecutionMode, Operation, ReductionResult, RegressionCoefficients,
    RegressionSums, StatOperation, DEFAULT_TOLERANCE,
};
pub use parallel::ParallelReducer;
pub use sequential::SequentialAggregator;
