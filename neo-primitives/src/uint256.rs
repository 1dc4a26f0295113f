//! Implementation of `UInt256`, the 256-bit hash used for transactions, blocks and assets.

use crate::constants::HASH_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::uint160::parse_reversed_hex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// Represents a 256-bit unsigned integer stored little-endian.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    /// Alias matching C# `UInt256.Length`.
    pub const LENGTH: usize = UINT256_SIZE;

    /// Returns a zero `UInt256`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT256_SIZE])
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt256` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input length is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT256_SIZE] = value
            .try_into()
            .map_err(|_| PrimitiveError::invalid_format(format!("Invalid length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    /// Parses a `UInt256` from its big-endian hexadecimal text, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 64 hex digits.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        parse_reversed_hex::<UINT256_SIZE>(s).map(Self)
    }

    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt256 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
