//! Tests for processing statistics and result structures

use super::*;
use crate::app::services::record_processor::stats::{ProcessingResult, ProcessingStats};

#[test]
fn test_processing_stats_new() {
    let stats = ProcessingStats::new();

    assert_eq!(stats.total_input, 0);
    assert_eq!(stats.temporally_suppressed, 0);
    assert_eq!(stats.missing_value, 0);
    assert_eq!(stats.final_output, 0);
    assert_eq!(stats, ProcessingStats::default());
}

#[test]
fn test_processing_stats_retention_rate() {
    let mut stats = ProcessingStats::new();

    // Empty case
    assert_eq!(stats.retention_rate(), 100.0);

    stats.total_input = 4;
    stats.final_output = 4;
    assert_eq!(stats.retention_rate(), 100.0);

    stats.final_output = 1;
    assert_eq!(stats.retention_rate(), 25.0);

    stats.final_output = 0;
    assert_eq!(stats.retention_rate(), 0.0);
}

#[test]
fn test_processing_stats_consistency() {
    let mut stats = ProcessingStats {
        total_input: 10,
        temporally_suppressed: 3,
        missing_value: 2,
        final_output: 5,
    };
    assert_eq!(stats.discarded(), 5);
    assert!(stats.is_consistent());

    stats.final_output = 6;
    assert!(!stats.is_consistent());
}

#[test]
fn test_processing_stats_summary() {
    let stats = ProcessingStats {
        total_input: 4,
        temporally_suppressed: 1,
        missing_value: 1,
        final_output: 2,
    };

    let summary = stats.summary();
    assert!(summary.contains("4 -> 2 records"));
    assert!(summary.contains("50.0% retained"));
    assert!(summary.contains("Suppressed: 1"));
    assert!(summary.contains("Missing value: 1"));
}

#[test]
fn test_processing_result_accessors() {
    let entries = vec![ScoredRecord::new(3, 25), ScoredRecord::new(1, 4)];
    let stats = ProcessingStats {
        total_input: 3,
        temporally_suppressed: 1,
        missing_value: 0,
        final_output: 2,
    };

    let result = ProcessingResult::new(entries, stats.clone());

    assert_eq!(result.entry_count(), 2);
    assert_eq!(result.top(), Some(&ScoredRecord::new(3, 25)));
    assert_eq!(result.summary(), stats.summary());
    assert_eq!(result.into_pairs(), vec![(3, Numeric::Int(25)), (1, Numeric::Int(4))]);
}

#[test]
fn test_processing_result_empty_top() {
    let result: ProcessingResult<u32> = ProcessingResult::new(Vec::new(), ProcessingStats::new());
    assert!(result.top().is_none());
}
