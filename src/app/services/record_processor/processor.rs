//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct and coordinates the
//! processing pipeline: temporal suppression, missing-value rejection,
//! scoring and ranking.

use crate::app::models::{Numeric, Record};
use crate::constants::LOW_RETENTION_THRESHOLD_PERCENT;
use tracing::debug;

use super::{
    quality_filter::apply_value_filter,
    scoring::{rank_descending, score_records},
    stats::{ProcessingResult, ProcessingStats},
    temporal_filter::apply_temporal_filter,
};

/// Record processor for time-ordered event records
///
/// The processor holds no configuration and no state, so a single value can
/// be shared freely between callers and threads.
///
/// # Example
///
/// ```rust
/// use record_ranker::{Numeric, Record, RecordProcessor};
///
/// let records = vec![
///     Record::new("a", 0, 1),
///     Record::without_value("b", 200),
///     Record::new("c", 400, -3.5),
/// ];
///
/// let result = RecordProcessor::new().process_with_stats(&records);
/// assert_eq!(result.entry_count(), 2);
/// assert_eq!(result.stats.missing_value, 1);
/// assert_eq!(result.into_pairs(), vec![("c", Numeric::Float(12.25)), ("a", Numeric::Int(1))]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordProcessor;

impl RecordProcessor {
    /// Create a new record processor
    pub fn new() -> Self {
        Self
    }

    /// Run the pipeline and return ranked `(id, score)` pairs
    ///
    /// Equal scores keep the order in which their records appear in the input.
    pub fn process<I: Clone>(&self, records: &[Record<I>]) -> Vec<(I, Numeric)> {
        self.process_with_stats(records).into_pairs()
    }

    /// Run the pipeline and return ranked entries with processing statistics
    ///
    /// This method applies the complete processing pipeline:
    /// 1. Temporal suppression against each record's input-order predecessor
    /// 2. Rejection of records without a value
    /// 3. Scoring (`value²`) and stable descending ranking
    ///
    /// # Arguments
    ///
    /// * `records` - Input records in timestamp order; never modified
    ///
    /// # Returns
    ///
    /// A `ProcessingResult` containing the ranked entries and statistics
    pub fn process_with_stats<I: Clone>(&self, records: &[Record<I>]) -> ProcessingResult<I> {
        let mut stats = ProcessingStats::new();
        stats.total_input = records.len();

        debug!(
            "Starting record processing pipeline for {} records",
            records.len()
        );

        // Step 1: Suppress records too close to their predecessor
        let spaced = apply_temporal_filter(records, &mut stats);

        // Step 2: Drop records without a measurement
        let valued = apply_value_filter(spaced, &mut stats);

        // Step 3: Score and rank
        let mut entries = score_records(valued);
        rank_descending(&mut entries);
        stats.final_output = entries.len();

        debug!("Record processing complete: {}", stats.summary());

        if stats.total_input > 0 && stats.retention_rate() < LOW_RETENTION_THRESHOLD_PERCENT {
            debug!(
                "Low retention in record processing: {:.1}% ({} suppressed, {} missing value)",
                stats.retention_rate(),
                stats.temporally_suppressed,
                stats.missing_value
            );
        }

        ProcessingResult::new(entries, stats)
    }
}

/// Filter, score and rank a time-ordered sequence of records
///
/// Shorthand for [`RecordProcessor::process`].
pub fn process_records<I: Clone>(records: &[Record<I>]) -> Vec<(I, Numeric)> {
    RecordProcessor::new().process(records)
}
