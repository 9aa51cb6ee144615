//! TRON account addresses.
//!
//! A TRON address is 21 bytes: a `0x41` prefix followed by the low 20 bytes
//! of the Keccak-256 hash of the account's public key. The human-readable
//! form is base58check: `base58(payload || sha256(sha256(payload))[..4])`,
//! which always starts with `T` for the `0x41` prefix.

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::VerifyingKey;
use sha2::{Digest as _, Sha256};
use sha3::Keccak256;

use crate::error::{Error, Result};

/// A TRON address in its 21-byte binary form.
///
/// # Examples
///
/// ```
/// use tron_kit::Address;
///
/// let usdt: Address = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".parse().unwrap();
/// assert_eq!(usdt.to_hex(), "41a614f803b6fd780986a42c78ec9c7f77e6ded13c");
/// assert_eq!(usdt.to_string(), "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; Self::LENGTH]);

impl Address {
    /// Binary length: prefix byte plus 20-byte account hash.
    pub const LENGTH: usize = 21;

    /// Network prefix byte shared by all TRON addresses.
    pub const PREFIX: u8 = 0x41;

    /// The all-zero address, used as the placeholder caller for read-only
    /// contract calls.
    pub const ZERO: Self = Self([
        0x41, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    /// Parse from the 21-byte binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH || bytes[0] != Self::PREFIX {
            return Err(Error::InvalidAddress);
        }
        let mut buf = [0u8; Self::LENGTH];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Parse from the 42-character hex form (`41...`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Parse from the base58check form (`T...`), verifying the checksum.
    pub fn from_base58(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptyAddress);
        }
        let raw = bs58::decode(s).into_vec()?;
        if raw.len() != Self::LENGTH + 4 {
            return Err(Error::InvalidAddress);
        }
        let (payload, checksum) = raw.split_at(Self::LENGTH);
        if check(payload) != checksum {
            return Err(Error::InvalidAddress);
        }
        Self::from_bytes(payload)
    }

    /// Derive the address owned by a secp256k1 public key.
    ///
    /// Keccak-256 over the uncompressed point (without the `0x04` tag), then
    /// the low 20 bytes behind the `0x41` prefix.
    pub fn from_public_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        let digest = Keccak256::digest(&point.as_bytes()[1..]);
        let mut buf = [0u8; Self::LENGTH];
        buf[0] = Self::PREFIX;
        buf[1..].copy_from_slice(&digest[12..]);
        Self(buf)
    }

    /// The base58check form.
    pub fn to_base58(&self) -> String {
        encode_check(&self.0)
    }

    /// The 42-character hex form (`41...`).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The 21-byte binary form.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The 21-byte binary form as an owned vector, as the wire messages
    /// carry it.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The 20-byte account hash without the network prefix, as the TVM
    /// represents addresses in calldata.
    pub fn evm_bytes(&self) -> &[u8] {
        &self.0[1..]
    }
}

/// First four bytes of `sha256(sha256(payload))`.
fn check(payload: &[u8]) -> [u8; 4] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&digest[..4]);
    checksum
}

/// Base58check-encode arbitrary payload bytes without length validation.
///
/// The REST API identifies accounts by base58check text, and request builders
/// must encode whatever bytes a contract message carries, valid or not.
pub(crate) fn encode_check(payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + 4);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(&check(payload));
    bs58::encode(raw).into_string()
}

impl FromStr for Address {
    type Err = Error;

    /// Accepts either the base58check form or the 42-character hex form.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyAddress);
        }
        if s.len() == 2 * Self::LENGTH && s.starts_with("41") {
            return Self::from_hex(s);
        }
        Self::from_base58(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
