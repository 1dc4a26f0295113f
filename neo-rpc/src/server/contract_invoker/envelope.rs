//! Self-describing `{"type": ..., "value": ...}` values.

use neo_contract::ContractParameter;
use neo_primitives::ContractParameterType;
use serde_json::Value;

use super::error::DecodeError;
use super::resolver::resolve;

/// A typed envelope borrowed from the raw input tree.
#[derive(Debug, Clone, Copy)]
pub struct TypedEnvelope<'a> {
    pub param_type: ContractParameterType,
    /// `None` when the envelope has no `value` field, as for `Void`.
    pub value: Option<&'a Value>,
}

impl<'a> TypedEnvelope<'a> {
    /// Reads the envelope shape without decoding its value.
    pub fn parse(raw: &'a Value) -> Result<Self, DecodeError> {
        let Value::Object(fields) = raw else {
            return Err(DecodeError::InvalidShape(
                "typed envelope must be an object".to_string(),
            ));
        };
        let type_name = fields
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DecodeError::InvalidShape("typed envelope has no string \"type\" field".to_string())
            })?;
        let param_type = ContractParameterType::from_string(type_name)
            .map_err(DecodeError::InvalidShape)?;
        Ok(Self {
            param_type,
            value: fields.get("value"),
        })
    }

    /// Decodes the carried value against the carried type.
    pub fn decode(&self) -> Result<ContractParameter, DecodeError> {
        resolve(self.param_type, self.value)
    }
}

/// Decodes a value that must be a typed envelope, as array elements and map
/// entries are.
pub fn decode_envelope(raw: &Value) -> Result<ContractParameter, DecodeError> {
    TypedEnvelope::parse(raw)?.decode()
}
