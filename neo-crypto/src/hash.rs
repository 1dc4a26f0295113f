//! Hash functions and base58check encoding used for Neo keys and addresses.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Cryptographic hash functions for Neo.
pub struct Crypto;

impl Crypto {
    /// Computes SHA-256 hash of the input data.
    ///
    /// # Example
    /// ```
    /// use neo_crypto::Crypto;
    /// let hash = Crypto::sha256(b"Hello, Neo!");
    /// assert_eq!(hash.len(), 32);
    /// ```
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    /// Computes Hash256 (double SHA-256), used for checksums and transaction hashes.
    pub fn hash256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(Sha256::digest(data)).into()
    }

    /// Computes Hash160 = RIPEMD160(SHA256(data)), used for script hashes.
    pub fn hash160(data: &[u8]) -> [u8; 20] {
        Ripemd160::digest(Sha256::digest(data)).into()
    }
}

/// Base58 encoding with a 4-byte double-SHA256 checksum.
pub struct Base58;

impl Base58 {
    /// Encodes data to a Base58Check string.
    pub fn encode_check(data: &[u8]) -> String {
        let mut payload = Vec::with_capacity(data.len() + 4);
        payload.extend_from_slice(data);
        let checksum = Crypto::hash256(data);
        payload.extend_from_slice(&checksum[..4]);
        bs58::encode(payload).into_string()
    }

    /// Decodes a Base58Check string back to bytes, verifying the checksum.
    pub fn decode_check(s: &str) -> Result<Vec<u8>, CryptoError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CryptoError::Base58(e.to_string()))?;

        if bytes.len() < 4 {
            return Err(CryptoError::Base58("payload too short".to_string()));
        }

        let (payload, checksum) = bytes.split_at(bytes.len() - 4);
        let expected = Crypto::hash256(payload);
        if checksum != &expected[..4] {
            return Err(CryptoError::Base58("checksum mismatch".to_string()));
        }

        Ok(payload.to_vec())
    }
}
