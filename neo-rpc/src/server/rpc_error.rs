// Copyright (C) 2015-2025 The Neo Project.
//
// Strongly-typed JSON-RPC error instances for the contract invoker methods,
// serialised to `{code, message, data}` error objects.

use serde_json::{json, Value};
use std::fmt::{self, Display};

/// Represents a JSON-RPC error returned by the invoker RPC methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcError {
    code: i32,
    message: String,
    data: Option<String>,
}

impl RpcError {
    /// Creates a new `RpcError` instance.
    pub fn new(code: i32, message: impl Into<String>, data: Option<String>) -> Self {
        let data = data.and_then(|value| {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        });
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Returns the JSON-RPC error code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the human readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns any additional error data when available.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Creates a copy of the error carrying an additional data payload.
    pub fn with_data(&self, data: impl Into<String>) -> Self {
        Self::new(self.code, self.message.clone(), Some(data.into()))
    }

    /// Returns the formatted error message used for exceptions/logging.
    pub fn error_message(&self) -> String {
        match &self.data {
            Some(data) => format!("{} - {}", self.message, data),
            None => self.message.clone(),
        }
    }

    /// Serialises the error into a JSON-RPC error object.
    pub fn to_json(&self) -> Value {
        let mut obj = json!({
            "code": self.code,
            "message": self.error_message(),
        });
        if let Some(data) = &self.data {
            obj["data"] = Value::String(data.clone());
        }
        obj
    }

    fn simple(code: i32, message: &'static str) -> Self {
        Self::new(code, message, None)
    }

    /// Invalid JSON-RPC request (spec defined).
    pub fn invalid_request() -> Self {
        Self::simple(-32600, "Invalid request")
    }

    /// Unknown RPC method.
    pub fn method_not_found() -> Self {
        Self::simple(-32601, "Method not found")
    }

    /// Invalid method parameters.
    pub fn invalid_params() -> Self {
        Self::simple(-32602, "Invalid params")
    }

    /// Internal JSON-RPC error.
    pub fn internal_server_error() -> Self {
        Self::simple(-32603, "Internal server RpcError")
    }

    /// The contract hash has no schema in the registry.
    pub fn contract_not_found() -> Self {
        Self::simple(-1101, "Smart contract doesn't exist")
    }

    /// A supplied value could not be decoded as its declared type.
    pub fn invalid_parameter_value() -> Self {
        Self::simple(-1211, "Invalid parameter value")
    }

    /// An integer literal was neither decimal nor prefixed hexadecimal.
    pub fn integer_parse_failed() -> Self {
        Self::simple(-1212, "Parsing integer or BigInteger failed")
    }

    /// The schema declares a type the decoder does not accept.
    pub fn wrong_parameter_type() -> Self {
        Self::simple(-1213, "Wrong parameter type")
    }

    /// The downstream invocation or transfer service failed.
    pub fn invocation_failed() -> Self {
        Self::simple(-1300, "Contract invocation failed")
    }
}

impl Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message())
    }
}
