//! Temporal suppression of closely-spaced records
//!
//! A record is suppressed when it arrives less than
//! [`MIN_TIMESTAMP_GAP`](crate::constants::MIN_TIMESTAMP_GAP) after the record
//! immediately before it in the input. Adjacency is always judged against the
//! original input order: a suppressed record still acts as the predecessor of
//! the record that follows it. Gaps between integer timestamps are exact.

use crate::app::models::{IndexedRecord, Record};
use crate::constants::MIN_TIMESTAMP_GAP;
use tracing::{debug, trace};

use super::stats::ProcessingStats;

/// Apply the temporal suppression rule to an input sequence
///
/// Walks the sequence once, pairing each record with its input-order
/// predecessor. The first record has no predecessor and always survives.
///
/// # Arguments
///
/// * `records` - Input records in timestamp order
/// * `stats` - Mutable reference to processing statistics
///
/// # Returns
///
/// The surviving records with their input indices, in input order
pub fn apply_temporal_filter<'a, I>(
    records: &'a [Record<I>],
    stats: &mut ProcessingStats,
) -> Vec<IndexedRecord<'a, I>> {
    let mut survivors = Vec::with_capacity(records.len());
    let mut suppressed = 0;

    for (index, current) in records.iter().enumerate() {
        let previous = index.checked_sub(1).map(|i| &records[i]);

        match previous {
            Some(previous) if is_temporally_suppressed(Some(previous), current) => {
                trace!(
                    "Record at index {} suppressed: {} after predecessor",
                    index,
                    current.gap_since(previous)
                );
                suppressed += 1;
            }
            _ => survivors.push((index, current)),
        }
    }

    stats.temporally_suppressed = suppressed;

    debug!(
        "Temporal filtering complete: {} -> {} records ({} suppressed)",
        records.len(),
        survivors.len(),
        suppressed
    );

    survivors
}

/// Check whether a record falls inside the suppression window of its predecessor
///
/// # Arguments
///
/// * `previous` - Record immediately before `current` in the input, if any
/// * `current` - Record under test
///
/// # Returns
///
/// True if `current` should be discarded
pub fn is_temporally_suppressed<I>(previous: Option<&Record<I>>, current: &Record<I>) -> bool {
    previous.is_some_and(|previous| current.gap_since(previous) < MIN_TIMESTAMP_GAP)
}

/// Count how many records the temporal rule would suppress
pub fn count_suppressed<I>(records: &[Record<I>]) -> usize {
    records
        .windows(2)
        .filter(|pair| is_temporally_suppressed(Some(&pair[0]), &pair[1]))
        .count()
}
