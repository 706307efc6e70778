//! Score computation and ranking
//!
//! The score of a record is the square of its value, exact for integer
//! values. Ranking sorts entries by score, highest first, with a stable sort:
//! entries with equal scores keep the order in which they survived filtering.

use crate::app::models::{IndexedRecord, Numeric, ScoredRecord};
use std::cmp::Ordering;
use tracing::debug;

/// Derive the ranking score from a measurement
pub fn score_value(value: Numeric) -> Numeric {
    value.squared()
}

/// Score every record that carries a value
///
/// Records without a value are skipped; callers normally run
/// [`apply_value_filter`](super::quality_filter::apply_value_filter) first so
/// that none remain.
pub fn score_records<I: Clone>(records: Vec<IndexedRecord<'_, I>>) -> Vec<ScoredRecord<I>> {
    records
        .into_iter()
        .filter_map(|(_, record)| {
            record
                .value
                .map(|value| ScoredRecord::new(record.id.clone(), score_value(value)))
        })
        .collect()
}

/// Sort entries by score, highest first
///
/// Integer and float scores compare exactly against each other. The ordering
/// is total, so the sort never panics. Stable: ties keep their current
/// relative order.
pub fn rank_descending<I>(entries: &mut [ScoredRecord<I>]) {
    entries.sort_by(|a, b| compare_scores_descending(&a.score, &b.score));

    debug!("Ranked {} scored records", entries.len());
}

/// Ordering for descending score sort
pub fn compare_scores_descending(a: &Numeric, b: &Numeric) -> Ordering {
    b.total_cmp(a)
}

/// Check that every adjacent pair is in non-increasing score order
pub fn is_ranked_descending<I>(entries: &[ScoredRecord<I>]) -> bool {
    entries
        .windows(2)
        .all(|pair| pair[0].score.total_cmp(&pair[1].score) != Ordering::Less)
}
