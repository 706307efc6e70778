//! Data models for record ranking
//!
//! This module contains the input record type, the scored output entry, and
//! the adapter that turns loosely-typed mapping records (JSON objects) into
//! typed records.

pub mod numeric;

pub use numeric::Numeric;

use crate::constants::fields;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Input Record
// =============================================================================

/// A single time-stamped event record
///
/// The identifier is opaque and carried through to the output untouched.
/// `value` is `None` both when the measurement is absent and when it was
/// explicitly null; `Some(Numeric::Int(0))` is a real measurement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Record<I> {
    /// Opaque record identifier, never interpreted
    pub id: I,

    /// Event time; input is expected in non-decreasing order
    pub timestamp: Numeric,

    /// Measurement, if one was taken
    #[serde(default)]
    pub value: Option<Numeric>,
}

/// A record borrowed together with its position in the input sequence
pub type IndexedRecord<'a, I> = (usize, &'a Record<I>);

impl<I> Record<I> {
    /// Create a record carrying a measurement
    pub fn new(id: I, timestamp: impl Into<Numeric>, value: impl Into<Numeric>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            value: Some(value.into()),
        }
    }

    /// Create a record with no measurement
    pub fn without_value(id: I, timestamp: impl Into<Numeric>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            value: None,
        }
    }

    /// Timestamp distance from an earlier record, exact for integer timestamps
    pub fn gap_since(&self, previous: &Record<I>) -> Numeric {
        self.timestamp.difference(previous.timestamp)
    }
}

impl Record<Value> {
    /// Convert a mapping-like record into a typed record
    ///
    /// Equivalent to [`records_from_mappings`] for a single element at index 0.
    pub fn from_mapping(mapping: &Value) -> Result<Self> {
        Self::from_mapping_at(0, mapping)
    }

    /// Convert a mapping-like record found at `index` of its input sequence
    ///
    /// `id` and `timestamp` are required. A missing or null `value` becomes
    /// `None`; any other non-numeric value is rejected. JSON integers keep
    /// their exact integer form.
    pub fn from_mapping_at(index: usize, mapping: &Value) -> Result<Self> {
        let object = mapping
            .as_object()
            .ok_or_else(|| Error::not_a_mapping(index))?;

        for field in fields::REQUIRED {
            if !object.contains_key(*field) {
                return Err(Error::missing_field(index, *field));
            }
        }

        let id = object[fields::ID].clone();
        let timestamp = numeric_field(index, fields::TIMESTAMP, &object[fields::TIMESTAMP])?;

        let value = match object.get(fields::VALUE) {
            None | Some(Value::Null) => None,
            Some(raw) => Some(numeric_field(index, fields::VALUE, raw)?),
        };

        Ok(Self {
            id,
            timestamp,
            value,
        })
    }
}

/// Extract a number from a JSON field, rejecting non-numbers
fn numeric_field(index: usize, field: &str, raw: &Value) -> Result<Numeric> {
    match raw {
        Value::Number(number) => Ok(Numeric::from(number)),
        other => Err(Error::invalid_field(
            index,
            field,
            format!("expected a number, found {other}"),
        )),
    }
}

/// Convert a sequence of mapping-like records into typed records
///
/// Fails on the first malformed element, reporting its index.
pub fn records_from_mappings(mappings: &[Value]) -> Result<Vec<Record<Value>>> {
    mappings
        .iter()
        .enumerate()
        .map(|(index, mapping)| Record::from_mapping_at(index, mapping))
        .collect()
}

// =============================================================================
// Output Entry
// =============================================================================

/// A ranked output entry: the originating record's id and its score
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoredRecord<I> {
    /// Identifier copied from the originating record
    pub id: I,

    /// Square of the originating record's value
    pub score: Numeric,
}

impl<I> ScoredRecord<I> {
    /// Create a new scored entry
    pub fn new(id: I, score: impl Into<Numeric>) -> Self {
        Self {
            id,
            score: score.into(),
        }
    }

    /// Split into the `(id, score)` pair
    pub fn into_pair(self) -> (I, Numeric) {
        (self.id, self.score)
    }
}

impl<I> From<ScoredRecord<I>> for (I, Numeric) {
    fn from(entry: ScoredRecord<I>) -> Self {
        entry.into_pair()
    }
}
