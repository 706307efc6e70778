//! Business constants for record ranking
//!
//! The suppression window and record field names are fixed rules, not
//! runtime configuration.

use crate::app::models::Numeric;

// =============================================================================
// Temporal Suppression
// =============================================================================

/// Minimum gap between a record and its input-order predecessor
///
/// A record whose timestamp is less than this far past the previous record's
/// timestamp is suppressed. A gap of exactly this value is kept.
pub const MIN_TIMESTAMP_GAP: Numeric = Numeric::Int(100);

// =============================================================================
// Record Field Names
// =============================================================================

/// Field names recognised when converting mapping-like records
pub mod fields {
    /// Opaque record identifier
    pub const ID: &str = "id";

    /// Numeric event timestamp
    pub const TIMESTAMP: &str = "timestamp";

    /// Optional numeric measurement
    pub const VALUE: &str = "value";

    /// Fields every mapping must carry
    pub const REQUIRED: &[&str] = &[ID, TIMESTAMP];
}

// =============================================================================
// Reporting
// =============================================================================

/// Retention percentage below which a processing run is logged as lossy
pub const LOW_RETENTION_THRESHOLD_PERCENT: f64 = 50.0;
