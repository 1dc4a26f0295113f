//! # neo-invoker
//!
//! Invoke Neo N3 smart contracts with loosely-typed JSON arguments.
//!
//! The workspace is organized into several crates:
//!
//! - [`neo_primitives`] - `UInt160`, `UInt256` and `ContractParameterType`
//! - [`neo_crypto`] - secp256r1 keys, WIF and address derivation
//! - [`neo_contract`] - typed contract parameters
//! - [`neo_rpc`] - the parameter decoder and the `invokecontractas`,
//!   `getaddress` and `send` RPC methods
//!
//! This crate adds offline collaborators ([`DryRunInvoker`], [`DryRunAssets`])
//! and the command implementations behind the `neo-invoker` binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_invoker::commands;
//!
//! let bound = commands::bind("String,Integer", r#"["mint", "0x0100"]"#).unwrap();
//! assert_eq!(bound[1]["value"], "256");
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod dry_run;

pub use neo_contract as contract;
pub use neo_crypto as crypto;
pub use neo_primitives as primitives;
pub use neo_rpc as rpc;

pub use dry_run::{DryRunAssets, DryRunInvoker};

/// Common imports for contract invocation.
pub mod prelude {
    pub use crate::contract::{ContractParameter, ContractParameterValue, IntegerValue};
    pub use crate::crypto::{derive, AccountKeys, Keypair, PublicKey};
    pub use crate::primitives::{ContractParameterType, UInt160, UInt256};
    pub use crate::rpc::server::contract_invoker::{bind_parameters, resolve};
    pub use crate::rpc::{
        ContractInvoker, ContractRegistry, InMemoryContractRegistry, InvokerSettings, RpcServer,
    };
}

/// Library version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
