//! Speedup reporting for sequential/parallel comparisons
//!
//! This module pairs the results and timings of the two execution modes,
//! prints them to the console and can persist them as a JSON document.

use crate::errors::Result;
use crate::statistics::{Element, Operation, ReductionResult};
use crate::timing::TimingSample;
use chrono::Utc;
use std::{fs, path::Path};

/// One operation measured in both execution modes
#[derive(Debug, Clone)]
pub struct Comparison<T: Element> {
    pub operation: Operation,
    pub sequential: ReductionResult<T>,
    pub parallel: ReductionResult<T>,
    pub sequential_timing: TimingSample,
    pub parallel_timing: TimingSample,
}

impl<T: Element> Comparison<T> {
    pub fn new(
        (sequential, sequential_timing): (ReductionResult<T>, TimingSample),
        (parallel, parallel_timing): (ReductionResult<T>, TimingSample),
    ) -> Self {
        Self {
            operation: sequential.operation(),
            sequential,
            parallel,
            sequential_timing,
            parallel_timing,
        }
    }

    /// Sequential duration divided by parallel duration.
    ///
    /// `None` when the parallel run was below clock resolution.
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel_timing.seconds();
        if parallel > 0.0 {
            Some(self.sequential_timing.seconds() / parallel)
        } else {
            None
        }
    }

    pub fn results_agree(&self, rel_tol: f64) -> bool {
        self.sequential.agrees_with(&self.parallel, rel_tol)
    }

    /// Print timings and speedup for a single-series statistic
    pub fn print_timings(&self) {
        println!("\n{}:", capitalize(self.operation.as_str()));
        println!("Sequential Result: {}", self.sequential.display_value());
        println!("Parallel Result: {}", self.parallel.display_value());
        println!("Sequential Time: {} µs", self.sequential_timing.micros());
        println!("Parallel Time: {} µs", self.parallel_timing.micros());
        println!("Speedup Factor: {}", format_speedup(self.speedup()));
    }

    /// Print both fitted lines followed by the speedup
    pub fn print_regression(&self) {
        for (label, result, timing) in [
            ("Sequential", &self.sequential, &self.sequential_timing),
            ("Parallel", &self.parallel, &self.parallel_timing),
        ] {
            if let ReductionResult::Regression(c) = result {
                println!("\n{} Execution:", label);
                println!(
                    "beta0: {}, beta1: {}, Time: {}s",
                    c.beta0,
                    c.beta1,
                    timing.seconds()
                );
                println!("Line Equation ({}): y = {}x + {}", label, c.beta1, c.beta0);
            }
        }
        println!("\nSpeedup: {}", format_speedup(self.speedup()));
    }

    pub fn to_json(&self) -> serde_json::Value {
        let sequential_micros = saturating_micros(&self.sequential_timing);
        let parallel_micros = saturating_micros(&self.parallel_timing);
        serde_json::json!({
            "operation": self.operation.as_str(),
            "sequential": {
                "result": self.sequential.to_json(),
                "micros": sequential_micros,
            },
            "parallel": {
                "result": self.parallel.to_json(),
                "micros": parallel_micros,
            },
            "speedup": self.speedup(),
        })
    }
}

/// Render a speedup ratio, or explain why there is none
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(ratio) => format!("{ratio:.2}"),
        None => "n/a (parallel time below timer resolution)".to_string(),
    }
}

/// Whole microseconds, clamped to `u64::MAX` for JSON
fn saturating_micros(timing: &TimingSample) -> u64 {
    u64::try_from(timing.micros()).unwrap_or(u64::MAX)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes a run's comparisons as a pretty-printed JSON document
pub struct ReportWriter<'a> {
    output_path: &'a Path,
}

impl<'a> ReportWriter<'a> {
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }

    /// Write `entries` (see [`Comparison::to_json`]) with run metadata.
    /// An existing file at the output path is replaced.
    pub fn write_report(&self, workers: usize, entries: &[serde_json::Value]) -> Result<()> {
        let document = serde_json::json!({
            "created": Utc::now().to_rfc3339(),
            "workers": workers,
            "comparisons": entries,
        });

        fs::write(self.output_path, serde_json::to_string_pretty(&document)?)?;
        log::info!("wrote report to {}", self.output_path.display());
        Ok(())
    }
}
