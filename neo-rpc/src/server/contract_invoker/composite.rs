//! Decoding of `Array` and `Map` parameters. Element types are not declared by
//! the schema, so every element and map side must be a typed envelope.

use neo_contract::ContractParameter;
use serde_json::Value;

use super::envelope::decode_envelope;
use super::error::DecodeError;

/// Decodes an `Array` value; absent or `null` is the empty array.
pub fn decode_array(value: Option<&Value>) -> Result<Vec<ContractParameter>, DecodeError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                decode_envelope(item).map_err(|err| {
                    DecodeError::InvalidShape(format!("array element {index}: {err}"))
                })
            })
            .collect(),
        Some(_) => Err(DecodeError::InvalidShape(
            "Array parameter must be a JSON array".to_string(),
        )),
    }
}

/// Decodes a `Map` value: an array of `{"key": envelope, "value": envelope}`.
pub fn decode_map(
    value: Option<&Value>,
) -> Result<Vec<(ContractParameter, ContractParameter)>, DecodeError> {
    let Some(Value::Array(entries)) = value else {
        return Err(DecodeError::InvalidShape(
            "Map parameter must be an array of key/value objects".to_string(),
        ));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let side = |name: &str| -> Result<ContractParameter, DecodeError> {
                let raw = entry.get(name).ok_or_else(|| {
                    DecodeError::InvalidShape(format!("map entry {index} has no \"{name}\""))
                })?;
                decode_envelope(raw).map_err(|err| {
                    DecodeError::InvalidShape(format!("map entry {index} {name}: {err}"))
                })
            };
            Ok((side("key")?, side("value")?))
        })
        .collect()
}
