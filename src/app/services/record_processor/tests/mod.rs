//! Tests for the record processor module
//!
//! Unit tests for each pipeline stage plus end-to-end processor tests.

pub mod scoring_tests;
pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::{IndexedRecord, Numeric, Record, ScoredRecord};

/// Nanosecond epoch timestamp well above 2^53
pub const EPOCH_NANOS: i64 = 1_700_000_000_000_000_000;

/// Install a test-friendly tracing subscriber; repeated calls are ignored
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Create a record with a value
pub fn valued(id: u32, timestamp: impl Into<Numeric>, value: impl Into<Numeric>) -> Record<u32> {
    Record::new(id, timestamp, value)
}

/// Create a record without a value
pub fn unvalued(id: u32, timestamp: impl Into<Numeric>) -> Record<u32> {
    Record::without_value(id, timestamp)
}

/// Create records spaced `gap` apart, each with value equal to its id
pub fn create_spaced_records(count: u32, gap: i64) -> Vec<Record<u32>> {
    (0..count)
        .map(|i| valued(i, i64::from(i) * gap, i))
        .collect()
}

/// The three-record scenario with a suppressed middle record
pub fn create_suppression_scenario() -> Vec<Record<u32>> {
    vec![valued(1, 0, 2), valued(2, 50, 3), valued(3, 150, 5)]
}

/// Pair each record with its input index
pub fn indexed<I>(records: &[Record<I>]) -> Vec<IndexedRecord<'_, I>> {
    records.iter().enumerate().collect()
}

/// Collect ids from scored entries, preserving order
pub fn ids<I: Clone>(entries: &[ScoredRecord<I>]) -> Vec<I> {
    entries.iter().map(|e| e.id.clone()).collect()
}

/// Collect ids from indexed records, preserving order
pub fn record_ids(records: &[IndexedRecord<'_, u32>]) -> Vec<u32> {
    records.iter().map(|(_, r)| r.id).collect()
}
