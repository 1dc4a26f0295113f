//! Positional parameter helpers shared by the RPC handlers.

use serde_json::Value;

use super::rpc_error::RpcError;
use super::rpc_exception::RpcException;

pub(super) fn invalid_params(message: impl Into<String>) -> RpcException {
    RpcException::from(RpcError::invalid_params().with_data(message.into()))
}

pub(super) fn expect_string_param<'a>(
    params: &'a [Value],
    index: usize,
    method: &str,
) -> Result<&'a str, RpcException> {
    params
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            invalid_params(format!(
                "{method} expects string parameter {}",
                index + 1
            ))
        })
}

/// Reads an optional array parameter; absent or `null` yields an empty slice.
pub(super) fn optional_array_param<'a>(
    params: &'a [Value],
    index: usize,
    method: &str,
) -> Result<&'a [Value], RpcException> {
    match params.get(index) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(values)) => Ok(values.as_slice()),
        Some(_) => Err(invalid_params(format!(
            "{method} expects array parameter {}",
            index + 1
        ))),
    }
}
