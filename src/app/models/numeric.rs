//! Exact numeric values for timestamps, measurements and scores
//!
//! Integers stay integers: differences and squares of two integers are
//! computed exactly in `i128`, so large epoch timestamps (e.g. nanoseconds)
//! and large integer measurements lose no precision. Arithmetic only falls
//! back to `f64` when a float is involved or an integer result overflows.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An integer or floating-point number
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    /// Exact integer
    Int(i128),
    /// Floating-point number
    Float(f64),
}

/// 2^127 as `f64`; every finite float strictly inside ±this truncates into `i128`
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

impl Numeric {
    /// Lossy conversion to `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Whether the number is held exactly as an integer
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// `self - other`, exact when both are integers
    pub fn difference(self, other: Numeric) -> Numeric {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Self::Float(a as f64 - b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        }
    }

    /// `self * self`, exact for integers whose square fits in `i128`
    pub fn squared(self) -> Numeric {
        match self {
            Self::Int(i) => i
                .checked_mul(i)
                .map_or_else(|| Self::Float((i as f64) * (i as f64)), Self::Int),
            Self::Float(f) => Self::Float(f * f),
        }
    }

    /// Total ordering across integers and floats
    ///
    /// Integer/float comparisons are exact. Floats order among themselves as
    /// `f64::total_cmp` does, so positive NaN sorts above every number and
    /// negative NaN below.
    pub fn total_cmp(&self, other: &Numeric) -> Ordering {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).reverse(),
        }
    }
}

/// Exact comparison of an integer with a float
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I128_BOUND {
        return Ordering::Less;
    }
    if f < -I128_BOUND {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    /// Numeric comparison; `None` whenever a NaN is involved
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.as_f64().is_nan() || other.as_f64().is_nan() {
            None
        } else {
            Some(self.total_cmp(other))
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeric {
            fn from(value: $t) -> Self {
                Self::Int(i128::from(value))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&serde_json::Number> for Numeric {
    fn from(number: &serde_json::Number) -> Self {
        if let Some(i) = number.as_i64() {
            Self::Int(i128::from(i))
        } else if let Some(u) = number.as_u64() {
            Self::Int(i128::from(u))
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(i) => {
                if let Ok(small) = i64::try_from(i) {
                    serializer.serialize_i64(small)
                } else if let Ok(unsigned) = u64::try_from(i) {
                    serializer.serialize_u64(unsigned)
                } else {
                    serializer.serialize_i128(i)
                }
            }
            Self::Float(f) => serializer.serialize_f64(f),
        }
    }
}

struct NumericVisitor;

impl Visitor<'_> for NumericVisitor {
    type Value = Numeric;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or floating-point number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Numeric, E> {
        Ok(Numeric::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Numeric, E> {
        Ok(Numeric::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Numeric, E> {
        Ok(Numeric::Int(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Numeric, E> {
        Ok(i128::try_from(value).map_or(Numeric::Float(value as f64), Numeric::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Numeric, E> {
        Ok(Numeric::Float(value))
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericVisitor)
    }
}
