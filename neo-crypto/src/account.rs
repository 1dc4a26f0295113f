//! Account key derivation: WIF, address, and hex key forms from a raw private key.

use serde::Serialize;

use crate::ecc256::{Keypair, PublicKey, PUBLIC_COMPRESSED_SIZE};
use crate::error::CryptoError;
use crate::hash::{Base58, Crypto};

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;

const PUSH_DATA1: u8 = 0x0c;
const SYSCALL: u8 = 0x41;
/// Interop hash of `System.Crypto.CheckSig`.
const CHECK_SIG_HASH_SUFFIX: [u8; 4] = [0x56, 0xe7, 0xb3, 0x27];

/// 40 bytes = PUSHDATA1 + length + 33-byte key + SYSCALL + 4-byte interop hash.
pub const CHECK_SIG_SIZE: usize = 1 + 1 + PUBLIC_COMPRESSED_SIZE + 1 + 4;

/// Textual forms of one account, as returned by `getaddress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountKeys {
    pub wif: String,
    pub address: String,
    pub privkey: String,
    pub pubkey: String,
}

/// Builds the single-signature verification script for `public_key`.
pub fn verification_script(public_key: &PublicKey) -> [u8; CHECK_SIG_SIZE] {
    let mut script = [0u8; CHECK_SIG_SIZE];
    script[0] = PUSH_DATA1;
    script[1] = PUBLIC_COMPRESSED_SIZE as u8;
    script[2..2 + PUBLIC_COMPRESSED_SIZE].copy_from_slice(&public_key.to_compressed());
    script[2 + PUBLIC_COMPRESSED_SIZE] = SYSCALL;
    script[CHECK_SIG_SIZE - 4..].copy_from_slice(&CHECK_SIG_HASH_SUFFIX);
    script
}

/// Script hash (little-endian) of the account owned by `public_key`.
pub fn script_hash(public_key: &PublicKey) -> [u8; 20] {
    Crypto::hash160(&verification_script(public_key))
}

/// Base58check address of the account owned by `public_key`.
pub fn address(public_key: &PublicKey, address_version: u8) -> String {
    let mut data = Vec::with_capacity(21);
    data.push(address_version);
    data.extend_from_slice(&script_hash(public_key));
    Base58::encode_check(&data)
}

impl Keypair {
    /// Exports the private key in compressed WIF format.
    pub fn export_wif(&self) -> String {
        let mut data = zeroize::Zeroizing::new([0u8; 34]);
        data[0] = WIF_VERSION;
        data[1..33].copy_from_slice(self.private_key.as_be_bytes());
        data[33] = WIF_COMPRESSED_FLAG;
        Base58::encode_check(data.as_slice())
    }

    pub fn address(&self, address_version: u8) -> String {
        address(&self.public_key, address_version)
    }
}

/// Derives every textual form of the account behind `private_key`.
///
/// # Errors
///
/// Fails when the input is not exactly 32 bytes or is not a valid secp256r1 scalar.
pub fn derive(private_key: &[u8], address_version: u8) -> Result<AccountKeys, CryptoError> {
    let keypair = Keypair::from_slice(private_key)?;
    Ok(AccountKeys {
        wif: keypair.export_wif(),
        address: keypair.address(address_version),
        privkey: keypair.private_key.to_hex(),
        pubkey: keypair.public_key.to_string(),
    })
}
