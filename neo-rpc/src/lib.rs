//! # Neo RPC
//!
//! RPC methods for invoking Neo smart contracts with loosely-typed JSON
//! arguments.
//!
//! The heart of the crate is the type-directed parameter decoder in
//! [`server::contract_invoker`]: given a contract's declared parameter schema
//! and the caller's raw JSON values, it produces correctly typed
//! [`neo_contract::ContractParameter`]s. Each value may be a bare value decoded
//! against the declared type or a self-describing `{type, value}` envelope.
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::ContractParameterType;
//! use neo_rpc::server::contract_invoker::bind_parameters;
//! use serde_json::json;
//!
//! let schema = [ContractParameterType::String, ContractParameterType::Integer];
//! let args = [json!("transfer"), json!({"type": "Integer", "value": "0x0100"})];
//! let bound = bind_parameters(&schema, &args).unwrap();
//! assert_eq!(bound.len(), 2);
//! assert_eq!(bound[1].to_bare_json(), json!("256"));
//! ```

pub mod server;

pub use server::{
    AssetTransfer, ContractInvoker, ContractRegistry, InMemoryContractRegistry, InvocationError,
    InvokerSettings, RpcError, RpcException, RpcServer,
};
