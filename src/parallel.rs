//! Parallel processing configuration and management
//!
//! The worker count is resolved once at process start (CLI flag, then the
//! `PAR_STATS_THREADS` environment variable, then hardware concurrency) and
//! handed to [`crate::statistics::ParallelReducer`] explicitly. Nothing here
//! touches Rayon's global pool.

use crate::errors::{ParStatsError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::env::VarError;

/// Environment variable consulted by [`ParallelConfig::from_env`]
pub const THREADS_ENV_VAR: &str = "PAR_STATS_THREADS";

/// Configuration for parallel processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    pub num_threads: Option<usize>,
}

impl ParallelConfig {
    /// Create a configuration that uses all available CPU cores
    pub fn all_cores() -> Self {
        Self {
            num_threads: Some(num_cpus::get()),
        }
    }

    /// Create a configuration that uses a specific number of threads
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Read the worker count from [`THREADS_ENV_VAR`], if set.
    ///
    /// # Errors
    ///
    /// Returns [`ParStatsError::InvalidConfig`] if the variable is set but is
    /// not a positive integer, including when it is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(THREADS_ENV_VAR))
    }

    fn from_env_value(value: std::result::Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(raw) => Self::parse_threads(&raw).map(Self::with_threads),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ParStatsError::InvalidConfig(format!(
                "{} is not valid Unicode: {:?}",
                THREADS_ENV_VAR, raw
            ))),
        }
    }

    /// Parse a worker count as given on the command line or in the environment
    pub fn parse_threads(raw: &str) -> Result<usize> {
        let threads = raw.trim().parse::<usize>().map_err(|_| {
            ParStatsError::InvalidConfig(format!("'{}' is not a valid thread count", raw))
        })?;
        if threads == 0 {
            return Err(ParStatsError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(threads)
    }

    /// The number of workers a reducer built from this configuration uses
    pub fn worker_count(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Build a dedicated thread pool sized to [`Self::worker_count`]
    ///
    /// # Errors
    ///
    /// Returns [`ParStatsError::InvalidConfig`] for an explicit zero and
    /// [`ParStatsError::ThreadPoolError`] when the OS refuses the threads.
    pub fn build_pool(&self) -> Result<ThreadPool> {
        if self.num_threads == Some(0) {
            return Err(ParStatsError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }

        let workers = self.worker_count();
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("par-stats-worker-{}", idx))
            .build()
            .map_err(|e| {
                ParStatsError::ThreadPoolError(format!(
                    "Failed to initialize thread pool with {} threads: {}",
                    workers, e
                ))
            })?;

        log::debug!("built worker pool with {} threads", workers);
        Ok(pool)
    }
}

/// Get information about the current parallel configuration
pub fn get_parallel_info(config: &ParallelConfig) -> ParallelInfo {
    ParallelInfo {
        configured_workers: config.worker_count(),
        available_cores: num_cpus::get(),
        available_parallelism: std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1),
    }
}

/// Information about the parallel processing environment
#[derive(Debug, Clone)]
pub struct ParallelInfo {
    pub configured_workers: usize,
    pub available_cores: usize,
    pub available_parallelism: usize,
}

impl ParallelInfo {
    /// Print parallel processing information
    pub fn print_info(&self) {
        println!("📊 Parallel Processing Information:");
        println!("   Configured workers: {}", self.configured_workers);
        println!("   Available CPU cores: {}", self.available_cores);
        println!("   Available parallelism: {}", self.available_parallelism);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_threads_rejects_zero_and_garbage() {
        assert_eq!(ParallelConfig::parse_threads(" 4 ").unwrap(), 4);
        assert!(matches!(
            ParallelConfig::parse_threads("0"),
            Err(ParStatsError::InvalidConfig(_))
        ));
        assert!(ParallelConfig::parse_threads("four").is_err());
    }

    #[test]
    fn env_value_unset_or_invalid() {
        // Test unset variable falls back to the default
        assert_eq!(
            ParallelConfig::from_env_value(Err(VarError::NotPresent)).unwrap(),
            ParallelConfig::default()
        );

        // Test a valid value
        assert_eq!(
            ParallelConfig::from_env_value(Ok("6".to_string())).unwrap(),
            ParallelConfig::with_threads(6)
        );

        // Test non-Unicode content is rejected, not ignored
        let raw = std::ffi::OsString::from("not-unicode");
        let err = ParallelConfig::from_env_value(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, ParStatsError::InvalidConfig(_)));
        assert!(err.to_string().contains(THREADS_ENV_VAR));
    }

    #[test]
    fn default_resolves_to_cpu_count() {
        assert_eq!(ParallelConfig::default().worker_count(), num_cpus::get().max(1));
        assert_eq!(ParallelConfig::with_threads(3).worker_count(), 3);
    }

    #[test]
    fn explicit_zero_cannot_build_pool() {
        let err = ParallelConfig::with_threads(0).build_pool().unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn pool_has_requested_size() {
        let pool = ParallelConfig::with_threads(2).build_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }
}
