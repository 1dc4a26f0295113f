//! Integer parameter values: machine-width when they fit, arbitrary precision otherwise.

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// The value of an `Integer` contract parameter.
///
/// Equality is numeric: `Fixed(255)` equals `Big(255)`.
#[derive(Debug, Clone)]
pub enum IntegerValue {
    Fixed(i64),
    Big(BigInt),
}

impl IntegerValue {
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        match self {
            IntegerValue::Fixed(value) => BigInt::from(*value),
            IntegerValue::Big(value) => value.clone(),
        }
    }

    /// Returns the value as `i64` when it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            IntegerValue::Fixed(value) => Some(*value),
            IntegerValue::Big(value) => value.to_i64(),
        }
    }

    /// Literal form accepted back by the integer parser: decimal when the value
    /// fits in `i64`, otherwise `0x`-prefixed hex of a non-negative magnitude.
    ///
    /// Negative values below `i64::MIN` have no such form. They are written in
    /// decimal and do not parse back to the same value, since the hex form only
    /// carries an unsigned magnitude. The decoder never produces such values.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self.to_i64() {
            Some(value) => value.to_string(),
            None => {
                let big = self.to_bigint();
                if big.sign() == num_bigint::Sign::Minus {
                    big.to_string()
                } else {
                    format!("0x{big:x}")
                }
            }
        }
    }
}

impl PartialEq for IntegerValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (IntegerValue::Fixed(a), IntegerValue::Fixed(b)) => a == b,
            _ => self.to_bigint() == other.to_bigint(),
        }
    }
}

impl Eq for IntegerValue {}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerValue::Fixed(value) => write!(f, "{value}"),
            IntegerValue::Big(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue::Fixed(value)
    }
}

impl From<BigInt> for IntegerValue {
    fn from(value: BigInt) -> Self {
        IntegerValue::Big(value)
    }
}
