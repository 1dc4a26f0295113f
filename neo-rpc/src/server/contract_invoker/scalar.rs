//! Decoding of bare values into non-composite parameter types.

use std::borrow::Cow;

use neo_contract::ContractParameterValue;
use neo_crypto::PublicKey;
use neo_primitives::{ContractParameterType, UInt160, UInt256};
use serde_json::{Number, Value};

use super::error::DecodeError;
use super::numeric::parse_integer;

/// Textual form of a raw value. Strings yield themselves; booleans and
/// numbers yield their JSON text.
pub(crate) fn extract_text(value: Option<&Value>) -> Result<Cow<'_, str>, DecodeError> {
    match value {
        None | Some(Value::Null) => Err(DecodeError::MissingValue),
        Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        Some(Value::Bool(flag)) => Ok(Cow::Owned(flag.to_string())),
        Some(Value::Number(number)) => Ok(Cow::Owned(number_text(number))),
        Some(Value::Array(_) | Value::Object(_)) => Err(DecodeError::NotText),
    }
}

/// Integral floats such as `5.0` or `1e2` print without a fraction.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64 =>
        {
            (float as i64).to_string()
        }
        _ => number.to_string(),
    }
}

fn parse_bool(text: &str) -> Result<bool, DecodeError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DecodeError::invalid_value(
            ContractParameterType::Boolean,
            format!("{text:?} is not a boolean literal"),
        ))
    }
}

fn parse_bytes(param_type: ContractParameterType, text: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(text).map_err(|err| DecodeError::invalid_value(param_type, err))
}

/// Decodes `value` as the scalar `param_type`.
///
/// `Void` accepts anything. `Array`, `Map` and `Any` are not scalars and
/// fail with [`DecodeError::UnsupportedType`].
pub fn decode_scalar(
    param_type: ContractParameterType,
    value: Option<&Value>,
) -> Result<ContractParameterValue, DecodeError> {
    use ContractParameterType as T;

    let decoded = match param_type {
        T::Void => ContractParameterValue::Void,
        T::Array | T::Map | T::Any => return Err(DecodeError::UnsupportedType(param_type)),
        T::Boolean => ContractParameterValue::Boolean(parse_bool(&extract_text(value)?)?),
        T::Integer => ContractParameterValue::Integer(parse_integer(&extract_text(value)?)?),
        T::Hash160 => ContractParameterValue::Hash160(
            UInt160::parse(&extract_text(value)?)
                .map_err(|err| DecodeError::invalid_value(param_type, err))?,
        ),
        T::Hash256 => ContractParameterValue::Hash256(
            UInt256::parse(&extract_text(value)?)
                .map_err(|err| DecodeError::invalid_value(param_type, err))?,
        ),
        T::Signature => {
            ContractParameterValue::Signature(parse_bytes(param_type, &extract_text(value)?)?)
        }
        T::ByteArray => {
            ContractParameterValue::ByteArray(parse_bytes(param_type, &extract_text(value)?)?)
        }
        T::PublicKey => ContractParameterValue::PublicKey(
            PublicKey::from_hex(&extract_text(value)?)
                .map_err(|err| DecodeError::invalid_value(param_type, err))?,
        ),
        T::String => ContractParameterValue::String(extract_text(value)?.into_owned()),
        T::InteropInterface => {
            ContractParameterValue::InteropInterface(extract_text(value)?.into_owned())
        }
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_contract::IntegerValue;
    use serde_json::json;

    const PUBLIC_KEY: &str = "026e4bd1ab2b358fa6afa7e7f61f1c5d6b1fbcf91f55c2e1e7dda3297e4a8bba03";

    fn decode(
        param_type: ContractParameterType,
        value: Value,
    ) -> Result<ContractParameterValue, DecodeError> {
        decode_scalar(param_type, Some(&value))
    }

    #[test]
    fn text_extraction() {
        assert_eq!(extract_text(Some(&json!("abc"))).unwrap(), "abc");
        assert_eq!(extract_text(Some(&json!(true))).unwrap(), "true");
        assert_eq!(extract_text(Some(&json!(17))).unwrap(), "17");
        assert_eq!(extract_text(None), Err(DecodeError::MissingValue));
        assert_eq!(extract_text(Some(&Value::Null)), Err(DecodeError::MissingValue));
        assert_eq!(extract_text(Some(&json!([1]))), Err(DecodeError::NotText));
        assert_eq!(extract_text(Some(&json!({"a": 1}))), Err(DecodeError::NotText));
    }

    #[test]
    fn integral_floats_decode_as_their_integer() {
        for (raw, expected) in [(json!(5.0), 5), (json!(1e2), 100), (json!(-4.0), -4)] {
            assert_eq!(
                decode(ContractParameterType::Integer, raw).unwrap(),
                ContractParameterValue::Integer(IntegerValue::Fixed(expected))
            );
        }
        assert_eq!(extract_text(Some(&json!(5.0))).unwrap(), "5");
        // "3.25" is not decimal, so the first two characters are dropped and "25" is hex.
        assert_eq!(
            decode(ContractParameterType::Integer, json!(3.25)).unwrap(),
            ContractParameterValue::Integer(IntegerValue::Fixed(0x25))
        );
    }

    #[test]
    fn boolean_is_case_insensitive() {
        assert_eq!(
            decode(ContractParameterType::Boolean, json!("TRUE")).unwrap(),
            ContractParameterValue::Boolean(true)
        );
        assert_eq!(
            decode(ContractParameterType::Boolean, json!(false)).unwrap(),
            ContractParameterValue::Boolean(false)
        );
        assert!(matches!(
            decode(ContractParameterType::Boolean, json!("yes")),
            Err(DecodeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn integer_accepts_numbers_and_strings() {
        assert_eq!(
            decode(ContractParameterType::Integer, json!(5)).unwrap(),
            ContractParameterValue::Integer(IntegerValue::Fixed(5))
        );
        assert_eq!(
            decode(ContractParameterType::Integer, json!("0x0a")).unwrap(),
            ContractParameterValue::Integer(IntegerValue::Fixed(10))
        );
        assert!(matches!(
            decode(ContractParameterType::Integer, json!(12.5)),
            Err(DecodeError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn hashes_use_big_endian_text() {
        let hash = "0xd2a4cff31913016155e38e474a2c06d08be276cf";
        let ContractParameterValue::Hash160(parsed) =
            decode(ContractParameterType::Hash160, json!(hash)).unwrap()
        else {
            panic!("expected Hash160");
        };
        assert_eq!(parsed.to_string(), hash);
        assert!(decode(ContractParameterType::Hash160, json!("0x1234")).is_err());
        assert!(decode(ContractParameterType::Hash256, json!(hash)).is_err());
    }

    #[test]
    fn byte_strings_are_hex() {
        assert_eq!(
            decode(ContractParameterType::ByteArray, json!("00ff")).unwrap(),
            ContractParameterValue::ByteArray(vec![0x00, 0xff])
        );
        assert_eq!(
            decode(ContractParameterType::Signature, json!("")).unwrap(),
            ContractParameterValue::Signature(Vec::new())
        );
        assert!(decode(ContractParameterType::ByteArray, json!("abc")).is_err());
        assert!(decode(ContractParameterType::Signature, json!("zz")).is_err());
    }

    #[test]
    fn public_key_must_be_on_curve() {
        let ContractParameterValue::PublicKey(key) =
            decode(ContractParameterType::PublicKey, json!(PUBLIC_KEY)).unwrap()
        else {
            panic!("expected PublicKey");
        };
        assert_eq!(key.to_string(), PUBLIC_KEY);
        assert!(decode(ContractParameterType::PublicKey, json!("02ff")).is_err());
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(
            decode(ContractParameterType::String, json!("  spaced ")).unwrap(),
            ContractParameterValue::String("  spaced ".into())
        );
        assert_eq!(
            decode(ContractParameterType::InteropInterface, json!("iterator")).unwrap(),
            ContractParameterValue::InteropInterface("iterator".into())
        );
        assert_eq!(
            decode(ContractParameterType::String, json!(["x"])),
            Err(DecodeError::NotText)
        );
    }

    #[test]
    fn void_never_fails() {
        assert_eq!(
            decode_scalar(ContractParameterType::Void, None).unwrap(),
            ContractParameterValue::Void
        );
        assert_eq!(
            decode(ContractParameterType::Void, json!({"anything": [1, 2]})).unwrap(),
            ContractParameterValue::Void
        );
    }

    #[test]
    fn absent_input_fails_for_required_types() {
        assert_eq!(
            decode_scalar(ContractParameterType::String, None),
            Err(DecodeError::MissingValue)
        );
        assert_eq!(
            decode_scalar(ContractParameterType::Integer, Some(&Value::Null)),
            Err(DecodeError::MissingValue)
        );
    }

    #[test]
    fn composites_and_any_are_not_scalars() {
        for param_type in [
            ContractParameterType::Array,
            ContractParameterType::Map,
            ContractParameterType::Any,
        ] {
            assert_eq!(
                decode(param_type, json!("x")),
                Err(DecodeError::UnsupportedType(param_type))
            );
        }
    }
}
