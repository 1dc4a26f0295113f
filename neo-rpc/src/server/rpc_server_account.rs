//! `getaddress`: account forms derived from a raw private key.

use std::sync::Arc;

use serde_json::Value;
use zeroize::Zeroizing;

use super::params::{expect_string_param, invalid_params};
use super::rpc_error::RpcError;
use super::rpc_exception::RpcException;
use super::rpc_method_attribute::RpcMethodDescriptor;
use super::rpc_server::{RpcHandler, RpcServer};

pub struct RpcServerAccount;

impl RpcServerAccount {
    pub fn register_handlers() -> Vec<RpcHandler> {
        vec![Self::handler("getaddress", Self::get_address)]
    }

    fn handler(
        name: &'static str,
        func: fn(&RpcServer, &[Value]) -> Result<Value, RpcException>,
    ) -> RpcHandler {
        RpcHandler::new(RpcMethodDescriptor::new_key_bearing(name), Arc::new(func))
    }

    /// `getaddress [privkey_hex]` returns `{wif, address, privkey, pubkey}`.
    fn get_address(server: &RpcServer, params: &[Value]) -> Result<Value, RpcException> {
        let private_key = expect_string_param(params, 0, "getaddress")?;
        let bytes = Zeroizing::new(
            hex::decode(private_key.trim())
                .map_err(|err| invalid_params(format!("invalid private key hex: {err}")))?,
        );
        let keys = neo_crypto::derive(&bytes, server.settings().address_version)
            .map_err(|err| invalid_params(format!("invalid private key: {err}")))?;
        serde_json::to_value(keys).map_err(|err| {
            RpcException::from(RpcError::internal_server_error().with_data(err.to_string()))
        })
    }
}
