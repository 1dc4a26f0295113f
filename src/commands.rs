//! Implementations of the `neo-invoker` subcommands.

use std::path::Path;
use std::sync::Arc;

use neo_crypto::{AccountKeys, CryptoError};
use neo_primitives::ContractParameterType;
use neo_rpc::server::contract_invoker::{bind_parameters, BindError};
use neo_rpc::server::SettingsError;
use neo_rpc::{InMemoryContractRegistry, InvokerSettings, RpcException, RpcServer};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::dry_run::{DryRunAssets, DryRunInvoker};

/// Errors reported by the command implementations.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A schema entry is not a parameter type name.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// Arguments or parameters are not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Arguments must be a JSON array.
    #[error("expected a JSON array of {0}")]
    NotAnArray(&'static str),
    /// Binding failed.
    #[error(transparent)]
    Bind(#[from] BindError),
    /// The private key is not hex.
    #[error("invalid private key hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The private key is not a secp256r1 scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(#[from] CryptoError),
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The RPC method failed.
    #[error("rpc error {code}: {message}", code = .0.code(), message = .0.error().error_message())]
    Rpc(#[from] RpcException),
}

/// Parses a comma separated list of parameter type names.
pub fn parse_schema(text: &str) -> Result<Vec<ContractParameterType>, CommandError> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| ContractParameterType::from_string(name).map_err(CommandError::InvalidSchema))
        .collect()
}

fn parse_array(text: &str, what: &'static str) -> Result<Vec<Value>, CommandError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(values) => Ok(values),
        Value::Null => Ok(Vec::new()),
        _ => Err(CommandError::NotAnArray(what)),
    }
}

/// Binds `args` (a JSON array) to `schema` and returns the typed envelopes.
pub fn bind(schema: &str, args: &str) -> Result<Vec<Value>, CommandError> {
    let schema = parse_schema(schema)?;
    let args = parse_array(args, "arguments")?;
    let bound = bind_parameters(&schema, &args)?;
    debug!(parameters = bound.len(), "bound arguments");
    Ok(bound.iter().map(|parameter| parameter.to_json()).collect())
}

/// Derives the account forms of a hex private key.
pub fn address(private_key_hex: &str, address_version: u8) -> Result<AccountKeys, CommandError> {
    let bytes = hex::decode(private_key_hex.trim())?;
    Ok(neo_crypto::derive(&bytes, address_version)?)
}

/// Loads settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<InvokerSettings, CommandError> {
    match path {
        Some(path) => Ok(InvokerSettings::load(path)?),
        None => Ok(InvokerSettings::default()),
    }
}

/// Builds an RPC server over the settings' static contracts and dry-run services.
pub fn dry_run_server(settings: InvokerSettings) -> RpcServer {
    let registry = InMemoryContractRegistry::from_entries(&settings.contracts);
    let network = settings.network;
    RpcServer::new(
        settings,
        Arc::new(registry),
        Arc::new(DryRunInvoker::new(network)),
        Arc::new(DryRunAssets::new(network)),
    )
}

/// Calls `method` on `server` with `params` (a JSON array).
pub fn call(server: &RpcServer, method: &str, params: &str) -> Result<Value, CommandError> {
    let params = parse_array(params, "parameters")?;
    Ok(server.call(method, &params)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_are_trimmed_and_case_insensitive() {
        assert_eq!(
            parse_schema(" string, INTEGER ,bool").unwrap(),
            vec![
                ContractParameterType::String,
                ContractParameterType::Integer,
                ContractParameterType::Boolean,
            ]
        );
        assert!(parse_schema("").unwrap().is_empty());
        assert!(matches!(
            parse_schema("String,Float"),
            Err(CommandError::InvalidSchema(_))
        ));
    }

    #[test]
    fn bind_requires_an_array() {
        assert!(matches!(
            bind("String", r#"{"a": 1}"#),
            Err(CommandError::NotAnArray("arguments"))
        ));
        assert!(matches!(bind("String", "[1,"), Err(CommandError::InvalidJson(_))));
        assert!(bind("Array", "null").unwrap()[0]["value"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn bind_reports_failing_position() {
        let err = bind("String,Boolean", r#"["a", "maybe"]"#).unwrap_err();
        assert!(err.to_string().starts_with("parameter 1 (Boolean)"), "{err}");
    }

    #[test]
    fn address_rejects_bad_input() {
        assert!(matches!(address("xyz", 0x35), Err(CommandError::InvalidHex(_))));
        assert!(matches!(address("0011", 0x35), Err(CommandError::InvalidKey(_))));
    }
}
