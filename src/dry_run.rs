//! Collaborators that sign nothing and broadcast nothing.
//!
//! They log what would be sent and return a deterministic hash of it, so the
//! whole RPC path can be exercised without a node.

use neo_contract::ContractParameter;
use neo_crypto::{Crypto, Keypair};
use neo_primitives::{UInt160, UInt256};
use neo_rpc::{AssetTransfer, ContractInvoker, InvocationError};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

/// Double SHA-256 of `network ‖ signer ‖ payload`.
fn preview_hash(network: u32, keypair: &Keypair, payload: &[u8]) -> UInt256 {
    let mut data = Vec::with_capacity(4 + 33 + payload.len());
    data.extend_from_slice(&network.to_le_bytes());
    data.extend_from_slice(&keypair.public_key.to_compressed());
    data.extend_from_slice(payload);
    UInt256::from(Crypto::hash256(&data))
}

/// [`ContractInvoker`] returning the hash of the encoded invocation.
#[derive(Debug, Clone, Copy)]
pub struct DryRunInvoker {
    /// Network magic mixed into every hash.
    pub network: u32,
}

impl DryRunInvoker {
    /// Creates an invoker for `network`.
    pub fn new(network: u32) -> Self {
        Self { network }
    }

    /// The invocation as it would be submitted: contract hash and envelopes.
    pub fn encode(contract: &UInt160, parameters: &[ContractParameter]) -> Value {
        serde_json::json!({
            "contract": contract.to_string(),
            "parameters": parameters.iter().map(ContractParameter::to_json).collect::<Vec<_>>(),
        })
    }
}

impl ContractInvoker for DryRunInvoker {
    fn call_contract(
        &self,
        keypair: &Keypair,
        contract: &UInt160,
        parameters: &[ContractParameter],
    ) -> Result<Option<UInt256>, InvocationError> {
        let invocation = Self::encode(contract, parameters);
        let hash = preview_hash(self.network, keypair, invocation.to_string().as_bytes());
        info!(%contract, %invocation, tx = %hash, "dry-run contract invocation");
        Ok(Some(hash))
    }
}

/// [`AssetTransfer`] returning the hash of the encoded transfer.
#[derive(Debug, Clone, Copy)]
pub struct DryRunAssets {
    /// Network magic mixed into every hash.
    pub network: u32,
}

impl DryRunAssets {
    /// Creates a transfer service for `network`.
    pub fn new(network: u32) -> Self {
        Self { network }
    }
}

impl AssetTransfer for DryRunAssets {
    fn send(
        &self,
        keypair: &Keypair,
        to: &UInt160,
        amount: Decimal,
        asset: &UInt256,
    ) -> Result<Option<UInt256>, InvocationError> {
        let payload = format!("{asset}:{to}:{amount}");
        let hash = preview_hash(self.network, keypair, payload.as_bytes());
        info!(%asset, %to, %amount, tx = %hash, "dry-run asset transfer");
        Ok(Some(hash))
    }
}
