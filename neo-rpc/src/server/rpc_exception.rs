use thiserror::Error;

use super::rpc_error::RpcError;

/// Error returned by RPC handlers; carries the stable numeric code of an [`RpcError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct RpcException {
    error: RpcError,
}

impl RpcException {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            error: RpcError::new(code, message, None),
        }
    }

    pub fn code(&self) -> i32 {
        self.error.code()
    }

    pub fn message(&self) -> &str {
        self.error.message()
    }

    pub fn data(&self) -> Option<&str> {
        self.error.data()
    }

    pub fn error(&self) -> &RpcError {
        &self.error
    }
}

impl From<RpcError> for RpcException {
    fn from(error: RpcError) -> Self {
        Self { error }
    }
}

impl From<RpcException> for RpcError {
    fn from(err: RpcException) -> Self {
        err.error
    }
}
