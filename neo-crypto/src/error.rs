//! Error types for key handling.

/// Errors raised while decoding keys or base58check payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("ecc256: invalid private key length {0}, expected 32 bytes")]
    InvalidPrivateKeyLength(usize),

    #[error("ecc256: private key is not a valid secp256r1 scalar")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,

    #[error("base58: {0}")]
    Base58(String),
}
