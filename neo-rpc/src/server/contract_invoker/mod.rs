//! `invokecontractas`: type-directed binding of loosely-typed JSON arguments to
//! a contract entry point, followed by a signed invocation.
//!
//! Decoding runs leaf-first:
//! - [`numeric`]: integer literals (decimal `i64`, else strip-two hex big integer)
//! - [`scalar`]: one bare value against one non-composite type
//! - [`composite`]: `Array`/`Map` values whose elements are typed envelopes
//! - [`envelope`]: `{"type", "value"}` objects
//! - [`resolver`]: envelope attempt, then bare-value fallback
//! - [`binder`]: one parameter per schema position
//! - [`assembler`]: schema lookup, binding and delegation

pub mod assembler;
pub mod binder;
pub mod composite;
pub mod envelope;
pub mod error;
pub mod numeric;
pub mod resolver;
pub mod scalar;


use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::server::params::{expect_string_param, optional_array_param};
use crate::server::rpc_exception::RpcException;
use crate::server::rpc_method_attribute::RpcMethodDescriptor;
use crate::server::rpc_server::{RpcHandler, RpcServer};

pub use assembler::InvocationAssembler;
pub use binder::bind_parameters;
pub use error::{BindError, DecodeError, InvokeError};
pub use resolver::resolve;

pub struct RpcServerContractInvoker;

impl RpcServerContractInvoker {
    pub fn register_handlers() -> Vec<RpcHandler> {
        vec![Self::handler("invokecontractas", invoke_contract_as)]
    }

    fn handler(
        name: &'static str,
        func: fn(&RpcServer, &[Value]) -> Result<Value, RpcException>,
    ) -> RpcHandler {
        RpcHandler::new(RpcMethodDescriptor::new_key_bearing(name), Arc::new(func))
    }
}

/// `invokecontractas [scripthash, privkey_hex, [args...]]`: returns the
/// transaction hash, or `null` when the call was rejected downstream.
fn invoke_contract_as(server: &RpcServer, params: &[Value]) -> Result<Value, RpcException> {
    let contract_hash = expect_string_param(params, 0, "invokecontractas")?;
    let private_key = expect_string_param(params, 1, "invokecontractas")?;
    let args = optional_array_param(params, 2, "invokecontractas")?;

    let tx_hash = server
        .assembler()
        .invoke(contract_hash, private_key, args)?;
    match tx_hash {
        Some(hash) => {
            info!(contract = contract_hash, tx = %hash, "contract invocation sent");
            Ok(Value::String(hash.to_string()))
        }
        None => Ok(Value::Null),
    }
}
