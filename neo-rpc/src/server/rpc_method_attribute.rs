// Lightweight descriptor annotating registered RPC handlers.

use serde::Deserialize;

/// Descriptor for RPC methods with security attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcMethodDescriptor {
    /// The name of the RPC method.
    pub name: String,
    /// Whether the method receives private key material in its parameters.
    /// The dispatcher never logs the parameters of such methods.
    #[serde(default)]
    pub handles_keys: bool,
}

impl RpcMethodDescriptor {
    /// Creates a new RPC method descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handles_keys: false,
        }
    }

    /// Creates a descriptor for a method that takes a raw private key.
    pub fn new_key_bearing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handles_keys: true,
        }
    }

    pub fn handles_keys(&self) -> bool {
        self.handles_keys
    }
}
