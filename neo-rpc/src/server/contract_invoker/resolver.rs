//! Two-tier resolution of one raw value against one declared type.

use neo_contract::{ContractParameter, ContractParameterValue};
use neo_primitives::ContractParameterType;
use serde_json::Value;
use tracing::trace;

use super::composite::{decode_array, decode_map};
use super::envelope::TypedEnvelope;
use super::error::DecodeError;
use super::scalar::decode_scalar;

/// Resolves `value` as `param_type`.
///
/// A typed envelope whose type equals `param_type` is used when it decodes;
/// anything else falls back to decoding `value` itself as a bare value. When
/// both a matching envelope and the fallback fail, the envelope value's error
/// is reported, since it names the actual defect.
pub fn resolve(
    param_type: ContractParameterType,
    value: Option<&Value>,
) -> Result<ContractParameter, DecodeError> {
    let Some(envelope) = try_envelope(param_type, value) else {
        return decode_raw(param_type, value);
    };
    match envelope.decode() {
        Ok(parameter) => Ok(parameter),
        Err(envelope_err) => {
            trace!(
                %param_type,
                error = %envelope_err,
                "envelope value rejected, decoding as bare value"
            );
            decode_raw(param_type, value).map_err(|_| envelope_err)
        }
    }
}

/// Envelope attempt. Every failure here only means "not an envelope for this
/// position" and yields `None`.
fn try_envelope(
    param_type: ContractParameterType,
    value: Option<&Value>,
) -> Option<TypedEnvelope<'_>> {
    let raw = value?;
    if !raw.is_object() {
        return None;
    }
    let envelope = match TypedEnvelope::parse(raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            trace!(%param_type, error = %err, "not a typed envelope, decoding as bare value");
            return None;
        }
    };
    if envelope.param_type != param_type {
        trace!(
            %param_type,
            envelope_type = %envelope.param_type,
            "envelope type differs from declared type, decoding as bare value"
        );
        return None;
    }
    Some(envelope)
}

/// Decodes `value` directly as `param_type`, without looking for an envelope.
pub fn decode_raw(
    param_type: ContractParameterType,
    value: Option<&Value>,
) -> Result<ContractParameter, DecodeError> {
    let decoded = match param_type {
        ContractParameterType::Array => ContractParameterValue::Array(decode_array(value)?),
        ContractParameterType::Map => ContractParameterValue::Map(decode_map(value)?),
        _ => decode_scalar(param_type, value)?,
    };
    Ok(ContractParameter::new(decoded))
}
