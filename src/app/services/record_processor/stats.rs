//! Processing statistics and result structures for the record pipeline
//!
//! Counters describe where each input record went: suppressed by the
//! temporal rule, rejected for a missing value, or emitted as a scored entry.

use crate::app::models::{Numeric, ScoredRecord};

/// Statistics for a single processing run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessingStats {
    /// Total number of input records
    pub total_input: usize,
    /// Records discarded for arriving too soon after their predecessor
    pub temporally_suppressed: usize,
    /// Records discarded for lacking a value
    pub missing_value: usize,
    /// Number of scored entries emitted
    pub final_output: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records that did not reach the output
    pub fn discarded(&self) -> usize {
        self.temporally_suppressed + self.missing_value
    }

    /// Calculate retention rate as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Check that every input record is accounted for exactly once
    pub fn is_consistent(&self) -> bool {
        self.total_input == self.discarded() + self.final_output
    }

    /// Get summary of processing statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} records ({:.1}% retained) | \
             Suppressed: {} | Missing value: {}",
            self.total_input,
            self.final_output,
            self.retention_rate(),
            self.temporally_suppressed,
            self.missing_value
        )
    }
}

/// Ranked entries together with the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult<I> {
    /// Scored entries, highest score first
    pub entries: Vec<ScoredRecord<I>>,
    /// Processing statistics
    pub stats: ProcessingStats,
}

impl<I> ProcessingResult<I> {
    /// Create a new processing result
    pub fn new(entries: Vec<ScoredRecord<I>>, stats: ProcessingStats) -> Self {
        Self { entries, stats }
    }

    /// Get the number of ranked entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Highest-scoring entry, if any
    pub fn top(&self) -> Option<&ScoredRecord<I>> {
        self.entries.first()
    }

    /// Convert into plain `(id, score)` pairs
    pub fn into_pairs(self) -> Vec<(I, Numeric)> {
        self.entries.into_iter().map(ScoredRecord::into_pair).collect()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
