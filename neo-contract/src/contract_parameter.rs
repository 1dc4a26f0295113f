use std::fmt;

use neo_crypto::PublicKey;
use neo_primitives::{ContractParameterType, UInt160, UInt256};
use serde_json::{json, Map, Value};

use crate::integer::IntegerValue;

/// Represents the possible values of smart contract parameters.
///
/// Each variant determines the parameter type, so a value can never disagree
/// with the type it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameterValue {
    Boolean(bool),
    Integer(IntegerValue),
    Hash160(UInt160),
    Hash256(UInt256),
    Signature(Vec<u8>),
    ByteArray(Vec<u8>),
    PublicKey(PublicKey),
    String(String),
    InteropInterface(String),
    Array(Vec<ContractParameter>),
    /// Entries keep insertion order; duplicate keys are kept as given.
    Map(Vec<(ContractParameter, ContractParameter)>),
    Void,
}

impl ContractParameterValue {
    #[must_use]
    pub const fn param_type(&self) -> ContractParameterType {
        match self {
            ContractParameterValue::Boolean(_) => ContractParameterType::Boolean,
            ContractParameterValue::Integer(_) => ContractParameterType::Integer,
            ContractParameterValue::Hash160(_) => ContractParameterType::Hash160,
            ContractParameterValue::Hash256(_) => ContractParameterType::Hash256,
            ContractParameterValue::Signature(_) => ContractParameterType::Signature,
            ContractParameterValue::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameterValue::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameterValue::String(_) => ContractParameterType::String,
            ContractParameterValue::InteropInterface(_) => ContractParameterType::InteropInterface,
            ContractParameterValue::Array(_) => ContractParameterType::Array,
            ContractParameterValue::Map(_) => ContractParameterType::Map,
            ContractParameterValue::Void => ContractParameterType::Void,
        }
    }
}

/// A typed argument for a contract entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    value: ContractParameterValue,
}

impl ContractParameter {
    pub fn new(value: ContractParameterValue) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn param_type(&self) -> ContractParameterType {
        self.value.param_type()
    }

    #[must_use]
    pub const fn value(&self) -> &ContractParameterValue {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> ContractParameterValue {
        self.value
    }

    /// Serialises the parameter as a typed envelope: `{"type": ..., "value": ...}`.
    ///
    /// `Void` parameters carry no `value` field.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "type".to_string(),
            Value::String(self.param_type().as_str().to_string()),
        );
        if !matches!(self.value, ContractParameterValue::Void) {
            obj.insert("value".to_string(), self.to_bare_json());
        }
        Value::Object(obj)
    }

    /// Serialises only the value, in the form a declared-type decoder accepts.
    ///
    /// Array elements and map entries are written as typed envelopes, since
    /// their types are not declared by the contract.
    pub fn to_bare_json(&self) -> Value {
        match &self.value {
            ContractParameterValue::Boolean(b) => Value::Bool(*b),
            ContractParameterValue::Integer(i) => Value::String(i.to_literal()),
            ContractParameterValue::Hash160(h) => Value::String(h.to_string()),
            ContractParameterValue::Hash256(h) => Value::String(h.to_string()),
            ContractParameterValue::Signature(bytes) | ContractParameterValue::ByteArray(bytes) => {
                Value::String(hex::encode(bytes))
            }
            ContractParameterValue::PublicKey(pk) => Value::String(pk.to_string()),
            ContractParameterValue::String(s) | ContractParameterValue::InteropInterface(s) => {
                Value::String(s.clone())
            }
            ContractParameterValue::Array(items) => {
                Value::Array(items.iter().map(ContractParameter::to_json).collect())
            }
            ContractParameterValue::Map(entries) => Value::Array(
                entries
                    .iter()
                    .map(|(key, value)| json!({ "key": key.to_json(), "value": value.to_json() }))
                    .collect(),
            ),
            ContractParameterValue::Void => Value::Null,
        }
    }
}

impl From<ContractParameterValue> for ContractParameter {
    fn from(value: ContractParameterValue) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ContractParameterValue::Boolean(b) => write!(f, "Boolean({b})"),
            ContractParameterValue::Integer(i) => write!(f, "Integer({i})"),
            ContractParameterValue::Hash160(h) => write!(f, "Hash160({h})"),
            ContractParameterValue::Hash256(h) => write!(f, "Hash256({h})"),
            ContractParameterValue::Signature(sig) => write!(f, "Signature({})", hex::encode(sig)),
            ContractParameterValue::ByteArray(b) => write!(f, "ByteArray({})", hex::encode(b)),
            ContractParameterValue::PublicKey(pk) => write!(f, "PublicKey({pk})"),
            ContractParameterValue::String(s) => write!(f, "String({s})"),
            ContractParameterValue::InteropInterface(s) => write!(f, "InteropInterface({s})"),
            ContractParameterValue::Array(items) => {
                write!(f, "Array[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            ContractParameterValue::Map(entries) => {
                write!(f, "Map{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            ContractParameterValue::Void => write!(f, "Void"),
        }
    }
}
