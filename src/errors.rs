//! Centralized error handling for par_stats
//!
//! Numeric edge cases (empty series, zero-variance regression) are not errors;
//! they resolve to documented sentinel or NaN/Inf values. This type covers the
//! failures that do abort a call.

use std::fmt;

/// Main error type for par_stats operations
#[derive(Debug)]
pub enum ParStatsError {
    /// The worker pool could not be built
    ThreadPoolError(String),

    /// Regression inputs of different lengths
    LengthMismatch { xs: usize, ys: usize },

    /// Rejected configuration value
    InvalidConfig(String),

    /// I/O operation errors
    IoError(std::io::Error),

    /// JSON report serialization errors
    JsonError(serde_json::Error),
}

impl fmt::Display for ParStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParStatsError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            ParStatsError::LengthMismatch { xs, ys } => write!(
                f,
                "Regression inputs differ in length: {} x-values, {} y-values",
                xs, ys
            ),
            ParStatsError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ParStatsError::IoError(e) => write!(f, "I/O error: {}", e),
            ParStatsError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ParStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParStatsError::IoError(e) => Some(e),
            ParStatsError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParStatsError {
    fn from(error: std::io::Error) -> Self {
        ParStatsError::IoError(error)
    }
}

impl From<serde_json::Error> for ParStatsError {
    fn from(error: serde_json::Error) -> Self {
        ParStatsError::JsonError(error)
    }
}

/// Result type alias for par_stats operations
pub type Result<T> = std::result::Result<T, ParStatsError>;
