//! par_stats: sequential vs. fork-join parallel reductions
//!
//! Computes minimum, maximum, sum, average and closed-form simple linear
//! regression over an in-memory numeric series, once with a single sequential
//! scan and once with a multi-worker fork-join reduction, and reports the
//! observed speedup.
//!
//! ## Key Features
//!
//! - **Shared combine semantics**: both modes fold with the same associative operators
//! - **Private partials**: workers never write shared state; partials combine after the join
//! - **Honest timing**: monotonic wall-clock brackets exactly one aggregator call
//! - **Dedicated pool**: Rayon thread pool sized by explicit configuration
//!
//! ## Module Organization
//!
//! - [`statistics`]: Aggregators, result types and combine operators
//! - [`timing`]: Monotonic timer and timing samples
//! - [`report`]: Speedup comparison, console output and JSON reports
//! - [`datasets`]: Demonstration inputs and filler generation
//! - [`demo`]: The two sequential-vs-parallel demonstrations
//! - [`parallel`]: Worker-count configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use par_stats::prelude::*;
//!
//! let config = ParallelConfig::with_threads(4);
//! let reducer = ParallelReducer::new(&config).unwrap();
//! let data = [1, 4, 8, 6, 9, 5, 3, 11, 22, 33, 44, 55, 66];
//!
//! assert_eq!(reducer.max(&data), SequentialAggregator::new().max(&data));
//! ```
//!
//! Parallel and sequential integer results are identical; real-valued sums
//! may differ in the last bits because partitioning reorders the additions.

pub mod datasets;
pub mod demo;
pub mod errors;
pub mod parallel;
pub mod report;
pub mod statistics;
pub mod timing;

// Direct re-exports for the public API
pub use errors::*;
pub use parallel::*;
pub use statistics::{
    Aggregator, Element, ExecutionMode, Operation, ParallelReducer, ReductionResult,
    RegressionCoefficients, SequentialAggregator, StatOperation,
};
pub use timing::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{ParStatsError, Result};
    pub use crate::parallel::ParallelConfig;
    pub use crate::report::{Comparison, ReportWriter};
    pub use crate::statistics::{
        Aggregator, Element, ExecutionMode, Operation, ParallelReducer, ReductionResult,
        RegressionCoefficients, SequentialAggregator, StatOperation,
    };
    pub use crate::timing::{Timer, TimingSample};
}
