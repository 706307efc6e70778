//! Missing-value rejection
//!
//! Records are only scored if they carry a measurement. The check is on
//! presence alone: a value of zero is a valid measurement.

use crate::app::models::{IndexedRecord, Record};
use tracing::{debug, trace};

use super::stats::ProcessingStats;

/// Drop records that have no measurement
///
/// # Arguments
///
/// * `records` - Records that survived temporal filtering, with input indices
/// * `stats` - Mutable reference to processing statistics
///
/// # Returns
///
/// Records with a present value, in their original relative order
pub fn apply_value_filter<'a, I>(
    records: Vec<IndexedRecord<'a, I>>,
    stats: &mut ProcessingStats,
) -> Vec<IndexedRecord<'a, I>> {
    let input_count = records.len();
    let mut filtered = Vec::with_capacity(input_count);
    let mut missing = 0;

    for (index, record) in records {
        if has_usable_value(record) {
            filtered.push((index, record));
        } else {
            trace!("Record at index {} rejected: no value", index);
            missing += 1;
        }
    }

    stats.missing_value = missing;

    debug!(
        "Value filtering complete: {} -> {} records ({} without value)",
        input_count,
        filtered.len(),
        missing
    );

    filtered
}

/// Check whether a record carries a measurement
pub fn has_usable_value<I>(record: &Record<I>) -> bool {
    record.value.is_some()
}

/// Count records without a measurement, regardless of timestamp spacing
pub fn count_missing_values<I>(records: &[Record<I>]) -> usize {
    records.iter().filter(|record| !has_usable_value(*record)).count()
}
