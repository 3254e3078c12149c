//! Lenient number parsing for request bodies.
//!
//! Clients may send numbers as JSON numbers or as numeric strings, and integer fields accept
//! floats without a fractional part.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Converts `value` to an `i64` if it's a whole number within range.
fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0. && in_range).then_some(value as i64)
}

impl Number {
    fn into_i64(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(f) => integral(f),
            Number::Text(s) => {
                let s = s.trim();
                s.parse()
                    .ok()
                    .or_else(|| s.parse().ok().and_then(integral))
            }
        }
    }

    fn into_f64(self) -> Option<f64> {
        match self {
            Number::Int(n) => Some(n as f64),
            Number::Float(f) => Some(f),
            Number::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Deserializes an integer from a number or a numeric string.
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Number::deserialize(deserializer)?
        .into_i64()
        .ok_or_else(|| D::Error::custom("expected an integer or an integer string"))
}

/// Deserializes a sequence of reals, each one a number or a numeric string.
pub fn floats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    Vec::<Number>::deserialize(deserializer)?
        .into_iter()
        .map(|n| {
            n.into_f64()
                .ok_or_else(|| D::Error::custom("expected a number or a numeric string"))
        })
        .collect()
}
