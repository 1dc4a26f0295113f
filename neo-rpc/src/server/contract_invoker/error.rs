use neo_crypto::CryptoError;
use neo_primitives::{ContractParameterType, PrimitiveError, UInt160};
use thiserror::Error;

use crate::server::rpc_error::RpcError;
use crate::server::rpc_exception::RpcException;
use crate::server::services::InvocationError;

/// Failure to decode one raw value against a declared parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("input required but absent")]
    MissingValue,
    #[error("input is not text")]
    NotText,
    #[error("invalid {param_type} value: {reason}")]
    InvalidValue {
        param_type: ContractParameterType,
        reason: String,
    },
    #[error("invalid integer literal {literal:?}")]
    InvalidInteger { literal: String },
    #[error("{0}")]
    InvalidShape(String),
    #[error("unsupported parameter type {0}")]
    UnsupportedType(ContractParameterType),
}

impl DecodeError {
    pub(crate) fn invalid_value(param_type: ContractParameterType, reason: impl ToString) -> Self {
        Self::InvalidValue {
            param_type,
            reason: reason.to_string(),
        }
    }

    /// The RPC error this failure is reported as.
    pub fn rpc_error(&self) -> RpcError {
        match self {
            DecodeError::MissingValue
            | DecodeError::NotText
            | DecodeError::InvalidValue { .. }
            | DecodeError::InvalidShape(_) => RpcError::invalid_parameter_value(),
            DecodeError::InvalidInteger { .. } => RpcError::integer_parse_failed(),
            DecodeError::UnsupportedType(_) => RpcError::wrong_parameter_type(),
        }
    }

    pub fn code(&self) -> i32 {
        self.rpc_error().code()
    }
}

/// Failure to bind caller values to a contract's entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("smart contract {0} doesn't exist")]
    SchemaNotFound(UInt160),
    #[error("parameter {index} ({param_type}): {source}")]
    ParameterBindingFailed {
        index: usize,
        param_type: ContractParameterType,
        #[source]
        source: DecodeError,
    },
}

/// Everything that can stop `invokecontractas` before or during delegation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("invalid contract hash: {0}")]
    InvalidContractHash(#[source] PrimitiveError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error("invalid private key: {0}")]
    InvalidKey(#[source] CryptoError),
    #[error("contract invocation failed: {0}")]
    Invocation(#[from] InvocationError),
}

impl From<BindError> for RpcException {
    fn from(err: BindError) -> Self {
        let rpc_error = match &err {
            BindError::SchemaNotFound(_) => RpcError::contract_not_found(),
            BindError::ParameterBindingFailed { source, .. } => source.rpc_error(),
        };
        RpcException::from(rpc_error.with_data(err.to_string()))
    }
}

impl From<InvokeError> for RpcException {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Bind(bind) => bind.into(),
            InvokeError::InvalidContractHash(_) | InvokeError::InvalidKey(_) => {
                RpcException::from(RpcError::invalid_params().with_data(err.to_string()))
            }
            InvokeError::Invocation(source) => {
                RpcException::from(RpcError::invocation_failed().with_data(source.to_string()))
            }
        }
    }
}
