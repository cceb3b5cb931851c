//! # Monetary Amounts
//!
//! Signed arbitrary-precision integer used for every monetary field.
//!
//! The magnitude is a 256-bit unsigned integer. On the wire an amount is a
//! decimal string (`"-42"`), and integer JSON numbers are accepted on input.
//! Negative amounts are representable so that validators can reject them
//! with a precise reason instead of failing the decode.

use primitive_types::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Amount parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Empty input.
    #[error("empty amount")]
    Empty,
    /// Non-decimal input.
    #[error("invalid decimal amount: {0}")]
    InvalidDigits(String),
    /// Magnitude exceeds 256 bits.
    #[error("amount overflows 256 bits")]
    Overflow,
}

/// Signed integer amount with a 256-bit magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Amount {
    negative: bool,
    magnitude: U256,
}

impl Amount {
    /// Zero.
    pub const ZERO: Amount = Amount {
        negative: false,
        magnitude: U256([0; 4]),
    };

    /// Build from sign and magnitude. Negative zero is normalised to zero.
    pub fn new(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Build from a signed machine integer.
    pub fn from_i64(value: i64) -> Self {
        Self::new(value < 0, U256::from(value.unsigned_abs()))
    }

    /// True when strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Absolute value.
    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::new(false, U256::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(AmountError::Empty),
        };
        if digits.is_empty() {
            return Err(AmountError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidDigits(s.to_string()));
        }
        let magnitude = U256::from_dec_str(digits).map_err(|_| AmountError::Overflow)?;
        Ok(Self::new(negative, magnitude))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount::from_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Err(E::custom(format!("amount must be an integer, got {v}")))
    }
}
