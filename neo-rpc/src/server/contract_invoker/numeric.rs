//! Integer literal interpretation.

use neo_contract::IntegerValue;
use num_bigint::{BigInt, BigUint};

use super::error::DecodeError;

/// Parses an integer literal.
///
/// Decimal `i64` is tried first. Otherwise the first two characters are
/// dropped, whatever they are, and the rest is read as hexadecimal into an
/// arbitrary-precision non-negative integer, so `"0xFF"` is 255.
pub fn parse_integer(literal: &str) -> Result<IntegerValue, DecodeError> {
    let trimmed = literal.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(IntegerValue::Fixed(value));
    }

    let digits = match trimmed.char_indices().nth(2) {
        Some((offset, _)) => &trimmed[offset..],
        None => "",
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidInteger {
            literal: literal.to_string(),
        });
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .map(|magnitude| IntegerValue::Big(BigInt::from(magnitude)))
        .ok_or_else(|| DecodeError::InvalidInteger {
            literal: literal.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decimal_fits_fixed_width() {
        assert_eq!(parse_integer("12345").unwrap(), IntegerValue::Fixed(12345));
        assert!(matches!(parse_integer("-7").unwrap(), IntegerValue::Fixed(-7)));
        assert!(matches!(parse_integer(" 42 ").unwrap(), IntegerValue::Fixed(42)));
    }

    #[test]
    fn prefixed_hex_becomes_big_integer() {
        let value = parse_integer("0xFF").unwrap();
        assert!(matches!(value, IntegerValue::Big(_)));
        assert_eq!(value, IntegerValue::Fixed(255));
    }

    #[test]
    fn prefix_is_not_validated() {
        assert_eq!(parse_integer("zz10").unwrap(), IntegerValue::Fixed(16));
    }

    #[test]
    fn decimal_beyond_i64_falls_to_hex_rule() {
        // "92" is dropped and "23372036854775808" is read as hex.
        let value = parse_integer("9223372036854775808").unwrap();
        assert_eq!(
            value.to_bigint(),
            BigInt::parse_bytes(b"23372036854775808", 16).unwrap()
        );
    }

    #[test]
    fn rejects_non_numeric_and_short_literals() {
        for literal in ["", "0x", "x", "abz", "0xZZ", "12.5", "0x-1"] {
            assert!(
                matches!(parse_integer(literal), Err(DecodeError::InvalidInteger { .. })),
                "{literal:?} should fail"
            );
        }
    }

    #[test]
    fn multibyte_prefix_does_not_split_a_char() {
        assert_eq!(parse_integer("éé1f").unwrap(), IntegerValue::Fixed(31));
        assert!(parse_integer("é").is_err());
    }

    proptest! {
        #[test]
        fn any_i64_round_trips(value in any::<i64>()) {
            prop_assert_eq!(parse_integer(&value.to_string()).unwrap(), IntegerValue::Fixed(value));
        }

        #[test]
        fn big_hex_round_trips(bytes in proptest::collection::vec(any::<u8>(), 9..40)) {
            let magnitude = BigUint::from_bytes_be(&bytes);
            let literal = format!("0x{magnitude:x}");
            prop_assert_eq!(
                parse_integer(&literal).unwrap(),
                IntegerValue::Big(BigInt::from(magnitude))
            );
        }
    }
}
