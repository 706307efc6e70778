//! Record Ranker Library
//!
//! A small Rust library for turning a time-ordered sequence of event records
//! into a ranked list of scores.
//!
//! This library provides tools for:
//! - Suppressing records that arrive too soon after their predecessor
//! - Rejecting records without a usable measurement
//! - Scoring surviving records (`value²`) and ranking them descending
//! - Exact integer arithmetic for timestamps and values, with float fallback
//! - Converting loosely-typed mapping records (JSON objects) into typed records
//!
//! ```rust
//! use record_ranker::{Numeric, Record, process_records};
//!
//! let records = vec![
//!     Record::new(1, 0, 2),
//!     Record::new(2, 50, 3),
//!     Record::new(3, 150, 5),
//! ];
//!
//! assert_eq!(process_records(&records), vec![(3, Numeric::Int(25)), (1, Numeric::Int(4))]);
//! ```

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_processor;
    }
}

// Re-export commonly used types
pub use app::models::{Numeric, Record, ScoredRecord, records_from_mappings};
pub use app::services::record_processor::{
    ProcessingResult, ProcessingStats, RecordProcessor, process_records,
};

/// Result type alias for record ranking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for converting loosely-typed input into records
///
/// The processing pipeline itself never fails; these errors only surface
/// from the mapping adapter in [`app::models`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input element is not a mapping
    #[error("Record at index {index} is not a mapping")]
    NotAMapping { index: usize },

    /// Required field absent from a mapping
    #[error("Record at index {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    /// Field present but of the wrong shape
    #[error("Record at index {index} has invalid field '{field}': {message}")]
    InvalidField {
        index: usize,
        field: String,
        message: String,
    },
}

impl Error {
    /// Create a not-a-mapping error
    pub fn not_a_mapping(index: usize) -> Self {
        Self::NotAMapping { index }
    }

    /// Create a missing field error
    pub fn missing_field(index: usize, field: impl Into<String>) -> Self {
        Self::MissingField {
            index,
            field: field.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        index: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            index,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Index of the offending record in the input sequence
    pub fn index(&self) -> usize {
        match self {
            Self::NotAMapping { index }
            | Self::MissingField { index, .. }
            | Self::InvalidField { index, .. } => *index,
        }
    }
}
