//! Collaborators the invoker delegates to: schema lookup, contract invocation
//! and system asset transfer.

use std::collections::HashMap;

use neo_contract::ContractParameter;
use neo_crypto::Keypair;
use neo_primitives::{ContractParameterType, UInt160, UInt256};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use thiserror::Error;

use super::rpc_server_settings::ContractEntry;

/// Failure reported by a downstream invocation or transfer service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("insufficient {asset} balance to cover {required}")]
    InsufficientFunds { asset: UInt256, required: Decimal },
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Failed(String),
}

/// Maps a contract script hash to the parameter types of its entry point.
pub trait ContractRegistry: Send + Sync {
    fn lookup_schema(&self, contract: &UInt160) -> Option<Vec<ContractParameterType>>;
}

/// Signs and broadcasts a contract invocation.
///
/// `Ok(None)` means the service declined the call without an error, which the
/// RPC layer reports as a `null` result.
pub trait ContractInvoker: Send + Sync {
    fn call_contract(
        &self,
        keypair: &Keypair,
        contract: &UInt160,
        parameters: &[ContractParameter],
    ) -> Result<Option<UInt256>, InvocationError>;
}

/// Transfers a system asset out of the account owned by `keypair`.
pub trait AssetTransfer: Send + Sync {
    fn send(
        &self,
        keypair: &Keypair,
        to: &UInt160,
        amount: Decimal,
        asset: &UInt256,
    ) -> Result<Option<UInt256>, InvocationError>;
}

/// Registry backed by a map, populated from settings or at runtime.
#[derive(Debug, Default)]
pub struct InMemoryContractRegistry {
    contracts: RwLock<HashMap<UInt160, Vec<ContractParameterType>>>,
}

impl InMemoryContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[ContractEntry]) -> Self {
        let registry = Self::new();
        for entry in entries {
            registry.register(entry.hash, entry.parameters.clone());
        }
        registry
    }

    /// Registers or replaces the schema of `contract`, returning the previous one.
    pub fn register(
        &self,
        contract: UInt160,
        schema: Vec<ContractParameterType>,
    ) -> Option<Vec<ContractParameterType>> {
        self.contracts.write().insert(contract, schema)
    }

    pub fn remove(&self, contract: &UInt160) -> Option<Vec<ContractParameterType>> {
        self.contracts.write().remove(contract)
    }

    pub fn len(&self) -> usize {
        self.contracts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.read().is_empty()
    }
}

impl ContractRegistry for InMemoryContractRegistry {
    fn lookup_schema(&self, contract: &UInt160) -> Option<Vec<ContractParameterType>> {
        self.contracts.read().get(contract).cloned()
    }
}
