//! `send`: system asset transfer signed by a raw private key.

use std::str::FromStr;
use std::sync::Arc;

use neo_crypto::Keypair;
use neo_primitives::{UInt160, UInt256};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::params::{expect_string_param, invalid_params};
use super::rpc_error::RpcError;
use super::rpc_exception::RpcException;
use super::rpc_method_attribute::RpcMethodDescriptor;
use super::rpc_server::{RpcHandler, RpcServer};
use super::rpc_server_settings::InvokerSettings;

/// Alias of the utility token accepted by `send`.
pub const UTILITY_TOKEN_ALIAS: &str = "CRON";
/// Alias of the governing token accepted by `send`.
pub const GOVERNING_TOKEN_ALIAS: &str = "CRONIUM";

pub struct RpcServerSystemAsset;

impl RpcServerSystemAsset {
    pub fn register_handlers() -> Vec<RpcHandler> {
        vec![Self::handler("send", Self::send)]
    }

    fn handler(
        name: &'static str,
        func: fn(&RpcServer, &[Value]) -> Result<Value, RpcException>,
    ) -> RpcHandler {
        RpcHandler::new(RpcMethodDescriptor::new_key_bearing(name), Arc::new(func))
    }

    /// `send [privkey_hex, address, amount, token?]` returns `{"txn_hash": ...}`.
    ///
    /// The token defaults to the utility token.
    fn send(server: &RpcServer, params: &[Value]) -> Result<Value, RpcException> {
        let settings = server.settings();
        let private_key = expect_string_param(params, 0, "send")?;
        let address = expect_string_param(params, 1, "send")?;
        let amount = parse_amount(params.get(2))?;
        let asset = match params.get(3) {
            None | Some(Value::Null) => settings.utility_token,
            Some(Value::String(token)) => parse_token_hash(token, settings)
                .map_err(|err| invalid_params(format!("invalid token: {err}")))?,
            Some(_) => return Err(invalid_params("send expects string parameter 4")),
        };

        let keypair = Keypair::from_hex(private_key)
            .map_err(|err| invalid_params(format!("invalid private key: {err}")))?;
        let to = UInt160::from_address(address, settings.address_version)
            .map_err(|err| invalid_params(err.to_string()))?;

        let tx_hash = server
            .assets()
            .send(&keypair, &to, amount, &asset)
            .map_err(|err| {
                RpcException::from(RpcError::invocation_failed().with_data(err.to_string()))
            })?;
        match &tx_hash {
            Some(hash) => info!(%asset, %amount, tx = %hash, "asset transfer sent"),
            None => warn!(%asset, %amount, "asset transfer rejected downstream"),
        }
        Ok(json!({ "txn_hash": tx_hash.map(|hash| hash.to_string()) }))
    }
}

/// Resolves a token name or hash. `CRON` and `CRONIUM` match case-insensitively
/// after trimming; anything else must be a `UInt256`.
pub fn parse_token_hash(
    token: &str,
    settings: &InvokerSettings,
) -> Result<UInt256, neo_primitives::PrimitiveError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case(UTILITY_TOKEN_ALIAS) {
        Ok(settings.utility_token)
    } else if token.eq_ignore_ascii_case(GOVERNING_TOKEN_ALIAS) {
        Ok(settings.governing_token)
    } else {
        UInt256::parse(token)
    }
}

/// Reads a positive transfer amount from a JSON number or numeric string.
pub fn parse_amount(value: Option<&Value>) -> Result<Decimal, RpcException> {
    let text = match value {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.trim().to_string(),
        _ => return Err(invalid_params("send expects a numeric amount as parameter 3")),
    };
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|err| invalid_params(format!("invalid amount {text:?}: {err}")))?;
    if amount <= Decimal::ZERO {
        return Err(invalid_params(format!("amount must be positive, got {amount}")));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_aliases_are_case_insensitive() {
        let settings = InvokerSettings::default();
        assert_eq!(
            parse_token_hash(" cron ", &settings).unwrap(),
            settings.utility_token
        );
        assert_eq!(
            parse_token_hash("CRONIUM", &settings).unwrap(),
            settings.governing_token
        );
        assert_eq!(
            parse_token_hash("Cronium", &settings).unwrap(),
            settings.governing_token
        );
    }

    #[test]
    fn token_hash_is_parsed() {
        let settings = InvokerSettings::default();
        let hash = "0x0000000000000000000000000000000000000000000000000000000000000042";
        assert_eq!(
            parse_token_hash(hash, &settings).unwrap(),
            UInt256::parse(hash).unwrap()
        );
        assert!(parse_token_hash("GAS", &settings).is_err());
    }

    #[test]
    fn amounts_from_numbers_and_strings() {
        assert_eq!(
            parse_amount(Some(&json!(1.5))).unwrap(),
            Decimal::from_str("1.5").unwrap()
        );
        assert_eq!(
            parse_amount(Some(&json!(" 10 "))).unwrap(),
            Decimal::from(10)
        );
        assert_eq!(
            parse_amount(Some(&json!("2.5e3"))).unwrap(),
            Decimal::from(2500)
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        for value in [json!(0), json!("-1"), json!("ten"), json!(true)] {
            assert_eq!(parse_amount(Some(&value)).unwrap_err().code(), -32602);
        }
        assert!(parse_amount(None).is_err());
    }
}
