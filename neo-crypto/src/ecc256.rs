// Copyright @ 2025 - present, R3E Network
// All Rights Reserved
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use p256::{
    elliptic_curve::sec1::ToEncodedPoint, PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::CryptoError;

pub const KEY_SIZE: usize = 32;
pub const PUBLIC_COMPRESSED_SIZE: usize = 33;

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, CryptoError> {
        let buf: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| CryptoError::InvalidPrivateKeyLength(slice.len()))?;
        Ok(Self::new(buf))
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_be_bytes())
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// A point on secp256r1, kept as affine coordinates.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    fn from_p256(public: &P256PublicKey) -> Result<Self, CryptoError> {
        let encoded = public.to_encoded_point(false);
        let (Some(x), Some(y)) = (encoded.x(), encoded.y()) else {
            return Err(CryptoError::InvalidPublicKey);
        };
        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        gx.copy_from_slice(x.as_ref());
        gy.copy_from_slice(y.as_ref());
        Ok(Self { gx, gy })
    }

    /// Decodes a SEC1 point (compressed `02/03` or uncompressed `04`).
    #[inline]
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let public =
            P256PublicKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_p256(&public)
    }

    /// Decodes the hexadecimal text of a SEC1 point.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(text.trim()).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut buf = [0u8; 65];
        buf[0] = 0x04;
        buf[1..33].copy_from_slice(&self.gx);
        buf[33..].copy_from_slice(&self.gy);
        buf
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; PUBLIC_COMPRESSED_SIZE] {
        let mut buf = [0u8; PUBLIC_COMPRESSED_SIZE];
        buf[0] = 0x02 + (self.gy[KEY_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(&self.gx);
        buf
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.to_compressed()))
            .finish()
    }
}

/// Compressed hex, as Neo prints an `ECPoint`.
impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_compressed()))
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[derive(Clone)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    #[inline]
    pub fn from_private(private_key: PrivateKey) -> Result<Self, CryptoError> {
        let secret = P256SecretKey::from_slice(private_key.as_be_bytes())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        let public_key = PublicKey::from_p256(&secret.public_key())?;
        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Builds a key pair from raw big-endian private key bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        Self::from_private(PrivateKey::from_slice(bytes)?)
    }

    /// Builds a key pair from the hexadecimal text of a private key.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(
            hex::decode(text.trim()).map_err(|_| CryptoError::InvalidPrivateKey)?,
        );
        Self::from_slice(&bytes)
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: &str = "026e4bd1ab2b358fa6afa7e7f61f1c5d6b1fbcf91f55c2e1e7dda3297e4a8bba03";

    #[test]
    fn compressed_roundtrip() {
        let pk = PublicKey::from_hex(PUBLIC).unwrap();
        assert_eq!(pk.to_string(), PUBLIC);

        let uncompressed = PublicKey::from_sec1_bytes(&pk.to_uncompressed()).unwrap();
        assert_eq!(uncompressed, pk);
    }

    #[test]
    fn rejects_off_curve_and_garbage() {
        assert_eq!(
            PublicKey::from_hex("02ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
            Err(CryptoError::InvalidPublicKey)
        );
        assert!(PublicKey::from_hex("not hex").is_err());
        assert!(PublicKey::from_hex("").is_err());
    }

    #[test]
    fn keypair_from_private_matches_public() {
        let private = PrivateKey::from_slice(&[0x11; KEY_SIZE]).unwrap();
        let keypair = Keypair::from_private(private.clone()).unwrap();
        let derived = PublicKey::from_sec1_bytes(&keypair.public_key.to_compressed()).unwrap();
        assert_eq!(derived, keypair.public_key);
        assert_eq!(keypair.private_key, private);
    }

    #[test]
    fn keypair_rejects_bad_keys() {
        assert_eq!(
            Keypair::from_slice(&[0x11; 31]).unwrap_err(),
            CryptoError::InvalidPrivateKeyLength(31)
        );
        assert_eq!(
            Keypair::from_slice(&[0u8; KEY_SIZE]).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
    }

    #[test]
    fn private_key_debug_is_redacted() {
        let private = PrivateKey::new([0x42; KEY_SIZE]);
        assert_eq!(format!("{private:?}"), "PrivateKey(\"***\")");
    }
}
