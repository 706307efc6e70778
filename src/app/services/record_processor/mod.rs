//! Record processing module for time-ordered event records
//!
//! This module provides the pipeline that turns a sequence of records into a
//! ranked list of `(id, score)` pairs.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`temporal_filter`] - Suppression of records too close to their predecessor
//! - [`quality_filter`] - Rejection of records without a value
//! - [`scoring`] - Score computation and descending ranking
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Temporal Suppression**: Discard a record when its timestamp is less than
//!    100 past the record immediately before it in the input
//! 2. **Value Filtering**: Discard records whose value is absent or null
//! 3. **Scoring**: Emit `(id, value²)` for each survivor, exact for integers
//! 4. **Ranking**: Stable sort by score, highest first
//!
//! # Example Usage
//!
//! ```rust
//! use record_ranker::app::services::record_processor::RecordProcessor;
//! use record_ranker::{Numeric, Record};
//!
//! let records = vec![
//!     Record::new(1, 0, 2),
//!     Record::new(2, 50, 3),
//!     Record::new(3, 150, 5),
//! ];
//!
//! let result = RecordProcessor::new().process_with_stats(&records);
//! println!("{}", result.summary());
//! assert_eq!(result.into_pairs(), vec![(3, Numeric::Int(25)), (1, Numeric::Int(4))]);
//! ```

pub mod processor;
pub mod quality_filter;
pub mod scoring;
pub mod stats;
pub mod temporal_filter;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{RecordProcessor, process_records};
pub use stats::{ProcessingResult, ProcessingStats};

// Re-export utility functions that might be useful externally
pub use quality_filter::{count_missing_values, has_usable_value};
pub use scoring::{is_ranked_descending, score_value};
pub use temporal_filter::{count_suppressed, is_temporally_suppressed};
