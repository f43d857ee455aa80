//! Numeric literals.

use std::cmp::Ordering;
use std::fmt;

/// A numeric literal as delivered by the lexer.
///
/// Floats are stored as bits so that tokens and documents keep `Eq`/`Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Int(i64),
    Float(u64),
}

impl Number {
    #[inline]
    pub fn float(value: f64) -> Self {
        Number::Float(value.to_bits())
    }

    /// The integer value, if this is an integer literal.
    #[inline]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Number::Int(v) => v as f64,
            Number::Float(bits) => f64::from_bits(bits),
        }
    }

    pub const fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Numeric comparison across kinds.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(bits) => {
                let v = f64::from_bits(bits);
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
