//! Implementation of `UInt160`, the 160-bit script hash used for contracts and accounts.

use crate::constants::ADDRESS_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer.
///
/// Bytes are stored little-endian; the textual form (`0x…`) is big-endian,
/// matching how Neo prints script hashes.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching C# `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input length is not exactly 20 bytes.
    #[inline]
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] = value
            .try_into()
            .map_err(|_| PrimitiveError::invalid_format(format!("Invalid length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    /// Gets the little-endian byte array.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Returns the bytes as a `Vec<u8>`.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Parses a `UInt160` from its big-endian hexadecimal text, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 40 hex digits.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        parse_reversed_hex::<UINT160_SIZE>(s).map(Self)
    }

    /// Converts the `UInt160` to its `0x`-prefixed big-endian hexadecimal string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Creates a `UInt160` from a script by computing RIPEMD160(SHA256(script)).
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        let sha256_hash = Sha256::digest(script);
        let hash160 = Ripemd160::digest(sha256_hash);
        let mut bytes = [0u8; UINT160_SIZE];
        bytes.copy_from_slice(&hash160);
        Self(bytes)
    }

    /// Converts this `UInt160` to a base58check address with the given version byte.
    #[must_use]
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(1 + UINT160_SIZE + 4);
        data.push(version);
        data.extend_from_slice(&self.0);
        let checksum = Sha256::digest(Sha256::digest(&data));
        data.extend_from_slice(&checksum[..4]);
        bs58::encode(data).into_string()
    }

    /// Parses a base58check address, requiring the given version byte.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidAddress` if the address is not valid Base58,
    /// has an incorrect length, carries another version byte or has a bad checksum.
    pub fn from_address(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address.trim())
            .into_vec()
            .map_err(|_| PrimitiveError::invalid_address("Invalid Base58 address"))?;

        if decoded.len() != 1 + UINT160_SIZE + 4 {
            return Err(PrimitiveError::invalid_address("Invalid address length"));
        }
        if decoded[0] != version {
            return Err(PrimitiveError::invalid_address(format!(
                "Invalid address version {:#04x}",
                decoded[0]
            )));
        }

        let (data, checksum) = decoded.split_at(1 + UINT160_SIZE);
        let expected = Sha256::digest(Sha256::digest(data));
        if checksum != &expected[..4] {
            return Err(PrimitiveError::invalid_address("Invalid address checksum"));
        }

        Self::from_bytes(&data[1..])
    }
}

/// Decodes big-endian hex text (optional `0x`) into little-endian bytes.
pub(crate) fn parse_reversed_hex<const N: usize>(s: &str) -> PrimitiveResult<[u8; N]> {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if s.len() != N * 2 {
        return Err(PrimitiveError::invalid_format(format!(
            "expected {} hex digits, got {}",
            N * 2,
            s.len()
        )));
    }

    let mut bytes = [0u8; N];
    hex::decode_to_slice(s, &mut bytes)
        .map_err(|err| PrimitiveError::invalid_format(err.to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ADDRESS_VERSION;
    use proptest::prelude::*;

    #[test]
    fn test_uint160_parse() {
        let uint = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(uint.to_array()[0], 1);
        assert!(uint.to_array()[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_uint160_parse_without_prefix() {
        let with = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
        let without = UInt160::parse("d2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_uint160_parse_rejects_bad_input() {
        assert!(UInt160::parse("0x00").is_err());
        assert!(UInt160::parse("zz00000000000000000000000000000000000000").is_err());
        assert!(UInt160::parse("").is_err());
    }

    #[test]
    fn test_uint160_to_hex_string() {
        let mut bytes = [0u8; UINT160_SIZE];
        bytes[UINT160_SIZE - 1] = 0x01;
        let uint = UInt160::from(bytes);
        assert_eq!(
            uint.to_hex_string(),
            "0x0100000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_uint160_from_bytes_length() {
        assert!(UInt160::from_bytes(&[0u8; 19]).is_err());
        assert!(UInt160::from_bytes(&[0u8; 21]).is_err());
        assert!(UInt160::from_bytes(&[0u8; 20]).unwrap().is_zero());
    }

    #[test]
    fn test_address_rejects_other_version() {
        let uint = UInt160::from_script(b"script");
        let address = uint.to_address(0x17);
        assert!(UInt160::from_address(&address, ADDRESS_VERSION).is_err());
        assert_eq!(UInt160::from_address(&address, 0x17).unwrap(), uint);
    }

    #[test]
    fn test_address_starts_with_n() {
        let uint = UInt160::from_script(b"Hello, Neo!");
        assert!(uint.to_address(ADDRESS_VERSION).starts_with('N'));
    }

    proptest! {
        #[test]
        fn test_hex_string_roundtrip(bytes in any::<[u8; UINT160_SIZE]>()) {
            let uint = UInt160::from(bytes);
            prop_assert_eq!(UInt160::parse(&uint.to_hex_string()).unwrap(), uint);
        }

        #[test]
        fn test_address_roundtrip(bytes in any::<[u8; UINT160_SIZE]>()) {
            let uint = UInt160::from(bytes);
            let address = uint.to_address(ADDRESS_VERSION);
            prop_assert_eq!(UInt160::from_address(&address, ADDRESS_VERSION).unwrap(), uint);
        }
    }
}
