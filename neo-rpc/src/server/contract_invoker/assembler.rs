use std::sync::Arc;

use neo_crypto::Keypair;
use neo_primitives::{UInt160, UInt256};
use serde_json::Value;
use tracing::{debug, warn};

use super::binder::bind_parameters;
use super::error::{BindError, InvokeError};
use crate::server::services::{ContractInvoker, ContractRegistry};

/// Resolves a contract's schema, binds the caller's values to it and hands the
/// typed parameters to the invocation service.
#[derive(Clone)]
pub struct InvocationAssembler {
    registry: Arc<dyn ContractRegistry>,
    invoker: Arc<dyn ContractInvoker>,
}

impl InvocationAssembler {
    pub fn new(registry: Arc<dyn ContractRegistry>, invoker: Arc<dyn ContractInvoker>) -> Self {
        Self { registry, invoker }
    }

    pub fn registry(&self) -> &Arc<dyn ContractRegistry> {
        &self.registry
    }

    /// Invokes `contract_hash` signed by `private_key_hex` with `args`.
    ///
    /// Fails with [`BindError::SchemaNotFound`] before any binding when the
    /// registry does not know the contract. `Ok(None)` means the invocation
    /// service declined the call.
    pub fn invoke(
        &self,
        contract_hash: &str,
        private_key_hex: &str,
        args: &[Value],
    ) -> Result<Option<UInt256>, InvokeError> {
        let contract = UInt160::parse(contract_hash.trim())
            .map_err(InvokeError::InvalidContractHash)?;
        let schema = self
            .registry
            .lookup_schema(&contract)
            .ok_or(BindError::SchemaNotFound(contract))?;

        let parameters = bind_parameters(&schema, args)?;
        debug!(%contract, parameters = parameters.len(), "bound invocation parameters");

        let keypair = Keypair::from_hex(private_key_hex).map_err(InvokeError::InvalidKey)?;
        let tx_hash = self
            .invoker
            .call_contract(&keypair, &contract, &parameters)?;
        if tx_hash.is_none() {
            warn!(%contract, "contract invocation rejected downstream");
        }
        Ok(tx_hash)
    }
}

impl std::fmt::Debug for InvocationAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationAssembler").finish_non_exhaustive()
    }
}
