// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! # Neo Crypto
//!
//! secp256r1 key handling for the contract invoker: private/public keys,
//! WIF export, Neo N3 verification scripts and address derivation.

pub mod account;
pub mod ecc256;
pub mod error;
pub mod hash;

pub use account::{derive, AccountKeys};
pub use ecc256::{Keypair, PrivateKey, PublicKey, KEY_SIZE};
pub use error::CryptoError;
pub use hash::{Base58, Crypto};
