// Copyright (C) 2015-2025 The Neo Project.
//
// Configuration of the contract invoker RPC methods. Deserialised from TOML
// or JSON, with PascalCase aliases for the keys used by node config files.

use std::fs;
use std::path::{Path, PathBuf};

use neo_primitives::{ContractParameterType, UInt160, UInt256, ADDRESS_VERSION};
use serde::Deserialize;
use thiserror::Error;

/// Little-endian bytes of the default utility token hash.
const UTILITY_TOKEN: [u8; 32] = [
    0xe7, 0x2d, 0x28, 0x69, 0x79, 0xee, 0x6c, 0xb1, 0xb7, 0xe6, 0x5d, 0xfd, 0xdf, 0xb2, 0xe3, 0x84,
    0x10, 0x0b, 0x8d, 0x14, 0x8e, 0x77, 0x58, 0xde, 0x42, 0xe4, 0x16, 0x8b, 0x71, 0x79, 0x2c, 0x60,
];

/// Little-endian bytes of the default governing token hash.
const GOVERNING_TOKEN: [u8; 32] = [
    0x9b, 0x7c, 0xff, 0xda, 0xa6, 0x74, 0xbe, 0xae, 0x0f, 0x93, 0x0e, 0xbe, 0x60, 0x85, 0xaf, 0x90,
    0x93, 0xe5, 0xfe, 0x56, 0xb3, 0x4a, 0x5c, 0x22, 0x0c, 0xcd, 0xcf, 0x6e, 0xfc, 0x33, 0x6f, 0xc5,
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported settings format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// A contract whose entry point schema is known without a chain lookup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContractEntry {
    #[serde(alias = "Hash")]
    pub hash: UInt160,
    #[serde(default, alias = "Parameters")]
    pub parameters: Vec<ContractParameterType>,
}

/// Settings for the invoker RPC methods (`invokecontractas`, `getaddress`, `send`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InvokerSettings {
    #[serde(default = "InvokerSettings::default_network", alias = "Network")]
    pub network: u32,
    #[serde(
        default = "InvokerSettings::default_address_version",
        alias = "AddressVersion"
    )]
    pub address_version: u8,
    /// Asset sent by `send` when no token is named, also aliased as `CRON`.
    #[serde(
        default = "InvokerSettings::default_utility_token",
        alias = "UtilityToken"
    )]
    pub utility_token: UInt256,
    /// Asset aliased as `CRONIUM` by `send`.
    #[serde(
        default = "InvokerSettings::default_governing_token",
        alias = "GoverningToken"
    )]
    pub governing_token: UInt256,
    #[serde(default, alias = "DisabledMethods")]
    pub disabled_methods: Vec<String>,
    #[serde(default, alias = "Contracts")]
    pub contracts: Vec<ContractEntry>,
}

impl InvokerSettings {
    const fn default_network() -> u32 {
        5_195_086
    }

    const fn default_address_version() -> u8 {
        ADDRESS_VERSION
    }

    fn default_utility_token() -> UInt256 {
        UInt256::from(UTILITY_TOKEN)
    }

    fn default_governing_token() -> UInt256 {
        UInt256::from(GOVERNING_TOKEN)
    }

    /// Loads settings from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns `true` when `method` is listed in `disabled_methods` (case-insensitive).
    pub fn is_method_disabled(&self, method: &str) -> bool {
        self.disabled_methods
            .iter()
            .any(|disabled| disabled.eq_ignore_ascii_case(method))
    }
}

impl Default for InvokerSettings {
    fn default() -> Self {
        Self {
            network: Self::default_network(),
            address_version: Self::default_address_version(),
            utility_token: Self::default_utility_token(),
            governing_token: Self::default_governing_token(),
            disabled_methods: Vec::new(),
            contracts: Vec::new(),
        }
    }
}
