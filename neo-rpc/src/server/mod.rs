//! RPC surface of the contract invoker: error model, settings, collaborator
//! traits, method handlers and the request dispatcher.

pub mod contract_invoker;
pub mod rpc_error;
pub mod rpc_exception;
pub mod rpc_method_attribute;
pub mod rpc_server;
pub mod rpc_server_account;
pub mod rpc_server_settings;
pub mod rpc_server_system_asset;
pub mod services;

mod params;

pub use contract_invoker::{InvocationAssembler, RpcServerContractInvoker};
pub use rpc_error::RpcError;
pub use rpc_exception::RpcException;
pub use rpc_method_attribute::RpcMethodDescriptor;
pub use rpc_server::{RpcCallback, RpcHandler, RpcServer};
pub use rpc_server_account::RpcServerAccount;
pub use rpc_server_settings::{ContractEntry, InvokerSettings, SettingsError};
pub use rpc_server_system_asset::RpcServerSystemAsset;
pub use services::{
    AssetTransfer, ContractInvoker, ContractRegistry, InMemoryContractRegistry, InvocationError,
};
