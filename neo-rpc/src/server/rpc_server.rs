// Copyright (C) 2015-2025 The Neo Project.
//
// Method table and JSON-RPC dispatcher for the contract invoker methods.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::contract_invoker::{InvocationAssembler, RpcServerContractInvoker};
use super::rpc_error::RpcError;
use super::rpc_exception::RpcException;
use super::rpc_method_attribute::RpcMethodDescriptor;
use super::rpc_server_account::RpcServerAccount;
use super::rpc_server_settings::InvokerSettings;
use super::rpc_server_system_asset::RpcServerSystemAsset;
use super::services::{AssetTransfer, ContractInvoker, ContractRegistry};

pub type RpcCallback =
    dyn Fn(&RpcServer, &[Value]) -> Result<Value, RpcException> + Send + Sync + 'static;

#[derive(Clone)]
pub struct RpcHandler {
    descriptor: RpcMethodDescriptor,
    callback: Arc<RpcCallback>,
}

impl RpcHandler {
    pub fn new(descriptor: RpcMethodDescriptor, callback: Arc<RpcCallback>) -> Self {
        Self {
            descriptor,
            callback,
        }
    }

    pub fn descriptor(&self) -> &RpcMethodDescriptor {
        &self.descriptor
    }

    pub fn callback(&self) -> Arc<RpcCallback> {
        Arc::clone(&self.callback)
    }
}

/// Serves the invoker RPC methods against injected collaborators.
pub struct RpcServer {
    settings: InvokerSettings,
    assembler: InvocationAssembler,
    assets: Arc<dyn AssetTransfer>,
    handlers: RwLock<HashMap<String, Arc<RpcHandler>>>,
}

impl RpcServer {
    /// Creates a server with `invokecontractas`, `getaddress` and `send` registered.
    pub fn new(
        settings: InvokerSettings,
        registry: Arc<dyn ContractRegistry>,
        invoker: Arc<dyn ContractInvoker>,
        assets: Arc<dyn AssetTransfer>,
    ) -> Self {
        let server = Self {
            settings,
            assembler: InvocationAssembler::new(registry, invoker),
            assets,
            handlers: RwLock::new(HashMap::new()),
        };
        server.register_handlers(RpcServerContractInvoker::register_handlers());
        server.register_handlers(RpcServerAccount::register_handlers());
        server.register_handlers(RpcServerSystemAsset::register_handlers());
        server
    }

    pub fn settings(&self) -> &InvokerSettings {
        &self.settings
    }

    pub fn assembler(&self) -> &InvocationAssembler {
        &self.assembler
    }

    pub fn assets(&self) -> &Arc<dyn AssetTransfer> {
        &self.assets
    }

    pub fn register_handlers(&self, handlers: Vec<RpcHandler>) {
        for handler in handlers {
            self.register_method(handler);
        }
    }

    /// Registers `handler`, replacing any handler with the same (case-insensitive) name.
    pub fn register_method(&self, handler: RpcHandler) {
        let key = handler.descriptor().name.to_ascii_lowercase();
        if self
            .handlers
            .write()
            .insert(key.clone(), Arc::new(handler))
            .is_some()
        {
            warn!(method = %key, "replaced existing rpc handler");
        }
    }

    /// Names of the registered methods that are not disabled, sorted.
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .read()
            .keys()
            .filter(|name| !self.settings.is_method_disabled(name))
            .cloned()
            .collect();
        names.sort();
        names
    }

    fn lookup(&self, method: &str) -> Option<Arc<RpcHandler>> {
        if self.settings.is_method_disabled(method) {
            return None;
        }
        self.handlers
            .read()
            .get(&method.to_ascii_lowercase())
            .cloned()
    }

    /// Calls `method` with positional `params`.
    pub fn call(&self, method: &str, params: &[Value]) -> Result<Value, RpcException> {
        let Some(handler) = self.lookup(method) else {
            debug!(method, "rpc method not found or disabled");
            return Err(RpcError::method_not_found().with_data(method).into());
        };

        info!(method, "dispatching rpc call");
        if !handler.descriptor().handles_keys() {
            let shown = Value::Array(params.to_vec());
            debug!(method, params = %shown, "rpc call parameters");
        }

        let callback = handler.callback();
        let result = callback(self, params);
        if let Err(err) = &result {
            debug!(method, code = err.code(), error = %err, "rpc call failed");
        }
        result
    }

    /// Handles one JSON-RPC 2.0 request object and builds its response.
    pub fn process_request(&self, request: &Value) -> Value {
        let id = request.get("id").cloned().unwrap_or(Value::Null);
        let outcome = Self::parse_request(request)
            .and_then(|(method, params)| self.call(method, params));
        match outcome {
            Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
            Err(err) => json!({"jsonrpc": "2.0", "id": id, "error": err.error().to_json()}),
        }
    }

    fn parse_request(request: &Value) -> Result<(&str, &[Value]), RpcException> {
        let Value::Object(fields) = request else {
            return Err(RpcError::invalid_request().into());
        };
        let method = fields
            .get("method")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_request().with_data("method must be a string"))?;
        let params = match fields.get("params") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(values)) => values.as_slice(),
            Some(_) => {
                return Err(RpcError::invalid_params()
                    .with_data("params must be an array")
                    .into())
            }
        };
        Ok((method, params))
    }
}

impl std::fmt::Debug for RpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcServer")
            .field("settings", &self.settings)
            .field("methods", &self.method_names())
            .finish_non_exhaustive()
    }
}
