use par_stats::datasets::line_points;
use par_stats::demo::{compare_statistics, run_regression_demo, run_statistics_demo};
use par_stats::parallel::ParallelConfig;
use par_stats::report::ReportWriter;
use par_stats::statistics::{
    ExecutionMode, Operation, ParallelReducer, ReductionResult, SequentialAggregator,
    StatOperation, DEFAULT_TOLERANCE,
};
use tempfile::tempdir;

#[test]
fn test_statistics_demo_end_to_end() {
    let reducer = ParallelReducer::new(&ParallelConfig::with_threads(4))
        .expect("Failed to build reducer");

    let comparisons = run_statistics_demo(&reducer, 0, None);
    assert_eq!(comparisons.len(), 4);

    // Test operations come back in report order
    let operations: Vec<Operation> = comparisons.iter().map(|c| c.operation).collect();
    assert_eq!(
        operations,
        StatOperation::ALL
            .iter()
            .map(|&op| Operation::from(op))
            .collect::<Vec<_>>()
    );

    // Test both modes agree and were timed separately
    for cmp in &comparisons {
        assert!(cmp.results_agree(DEFAULT_TOLERANCE));
        assert_eq!(cmp.sequential_timing.mode, ExecutionMode::Sequential);
        assert_eq!(cmp.parallel_timing.mode, ExecutionMode::Parallel);
        assert_eq!(cmp.sequential_timing.operation, cmp.operation);
    }

    // Test values of the literal prefix
    assert_eq!(comparisons[0].sequential, ReductionResult::Min(1));
    assert_eq!(comparisons[1].parallel, ReductionResult::Max(66));
    assert_eq!(comparisons[2].parallel, ReductionResult::Sum(267));
    match comparisons[3].parallel {
        ReductionResult::Average(avg) => assert!((avg - 20.538).abs() < 1e-3),
        ref other => panic!("expected average, got {:?}", other),
    }
}

#[test]
fn test_seeded_statistics_demo_is_reproducible() {
    let reducer = ParallelReducer::new(&ParallelConfig::with_threads(2))
        .expect("Failed to build reducer");

    let a = run_statistics_demo(&reducer, 10_000, Some(99));
    let b = run_statistics_demo(&reducer, 10_000, Some(99));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.sequential, y.sequential);
        assert!(x.results_agree(DEFAULT_TOLERANCE));
    }
}

#[test]
fn test_regression_demo_and_json_report() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("report.json");

    let reducer = ParallelReducer::new(&ParallelConfig::with_threads(3))
        .expect("Failed to build reducer");
    let cmp = run_regression_demo(&reducer).expect("Regression demo failed");
    assert_eq!(cmp.operation, Operation::Regression);
    assert!(cmp.results_agree(DEFAULT_TOLERANCE));

    ReportWriter::new(&file_path)
        .write_report(reducer.workers(), &[cmp.to_json()])
        .expect("Failed to write report");

    // Test report contents
    let content = std::fs::read_to_string(&file_path).expect("Failed to read report");
    let json: serde_json::Value = serde_json::from_str(&content).expect("Invalid JSON");

    assert_eq!(json["workers"], 3);
    assert!(json["created"].is_string());
    let entry = &json["comparisons"][0];
    assert_eq!(entry["operation"], "linear regression");
    let beta1 = entry["parallel"]["result"]["beta1"].as_f64().unwrap();
    let beta0 = entry["sequential"]["result"]["beta0"].as_f64().unwrap();
    assert!((beta1 - 0.6).abs() < 1e-9);
    assert!((beta0 - 2.2).abs() < 1e-9);
}

#[test]
fn test_report_overwrites_existing_file() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("report.json");
    std::fs::write(&file_path, "stale").unwrap();

    ReportWriter::new(&file_path).write_report(1, &[]).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file_path).unwrap()).unwrap();
    assert_eq!(json["comparisons"].as_array().map(Vec::len), Some(0));
}

/// Large-N speedup check. Timing-sensitive, so only run on demand:
/// `cargo test --release -- --ignored`
#[test]
#[ignore]
fn benchmark_large_series_speedup() {
    if num_cpus::get() < 2 {
        return;
    }

    let reducer =
        ParallelReducer::new(&ParallelConfig::all_cores()).expect("Failed to build reducer");
    let data: Vec<f64> = line_points(0.5, 1.0, 20_000_000).1;

    let comparisons = compare_statistics(&SequentialAggregator::new(), &reducer, &data);
    let sum = &comparisons[2];
    assert!(sum.results_agree(DEFAULT_TOLERANCE));

    let speedup = sum.speedup().expect("parallel run too fast to time");
    assert!(speedup > 1.0, "speedup {speedup:.2} not above 1");
}
