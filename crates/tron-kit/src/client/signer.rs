//! secp256k1 keys and transaction signing.
//!
//! A TRON transaction id is the SHA-256 digest of the serialized raw
//! transaction, and a signature is the 65-byte recoverable ECDSA form (r, s,
//! recovery id) over that digest. Nodes recover the signer's address from
//! the signature, so no public key travels with the transaction.

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::{SigningKey, VerifyingKey};
use prost::Message;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::proto::core;
use crate::types::Address;

/// A secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Parse a 32-byte hex key, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| Error::InvalidPrivateKey)?;
        Self::from_bytes(&bytes)
    }

    /// Build a key from raw scalar bytes. Rejects anything that is not
    /// exactly 32 bytes or not a valid curve scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::InvalidPrivateKey);
        }
        let key = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { key })
    }

    /// Generate a fresh random key.
    pub fn random() -> Self {
        Self {
            key: SigningKey::random(&mut OsRng),
        }
    }

    /// The matching public key.
    pub fn public_key(&self) -> &VerifyingKey {
        self.key.verifying_key()
    }

    /// The TRON address derived from this key.
    pub fn address(&self) -> Address {
        Address::from_public_key(self.key.verifying_key())
    }

    /// The key material as lowercase hex, without a prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.key.to_bytes())
    }

    /// Sign a 32-byte digest. Returns the 65-byte signature with the
    /// recovery id in the final byte.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>> {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest)?;
        let mut bytes = signature.to_vec();
        bytes.push(recovery_id.to_byte());
        Ok(bytes)
    }

    /// Append this key's signature over the transaction's raw data.
    ///
    /// Fails with [`Error::InvalidTransaction`] when the transaction has no
    /// raw data to sign. Existing signatures are kept, so multisig callers
    /// sign in turn.
    pub fn sign_transaction(&self, tx: &mut core::Transaction) -> Result<()> {
        let digest = txid(tx)?;
        let signature = self.sign_digest(&digest)?;
        tx.signature.push(signature);
        Ok(())
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        f.debug_struct("PrivateKey")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Transaction id: SHA-256 of the serialized raw transaction.
pub fn txid(tx: &core::Transaction) -> Result<Vec<u8>> {
    let raw = tx.raw_data.as_ref().ok_or(Error::InvalidTransaction)?;
    Ok(Sha256::digest(raw.encode_to_vec()).to_vec())
}

#[cfg(test)]
mod tests {
    use k256::ecdsa::{RecoveryId, Signature};

    use super::*;
    use crate::proto::core::transaction;

    fn sample_tx() -> core::Transaction {
        core::Transaction {
            raw_data: Some(transaction::Raw {
                ref_block_bytes: vec![0x12, 0x34],
                ref_block_hash: vec![0u8; 8],
                expiration: 1_700_000_000_000,
                timestamp: 1_699_999_940_000,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    // ========================================================================
    // Key parsing tests
    // ========================================================================

    #[test]
    fn test_from_hex_accepts_0x_prefix() {
        let bare = "4d95f91dbb2c04d7f7b8eba83a92f4f34e0bc3a0d5cd9f7db5c5e9a3f8c2b1a0";
        let prefixed = format!("0x{bare}");

        let a = PrivateKey::from_hex(bare).unwrap();
        let b = PrivateKey::from_hex(&prefixed).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.to_hex(), bare);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            PrivateKey::from_hex("").unwrap_err(),
            Error::InvalidPrivateKey
        ));
        assert!(matches!(
            PrivateKey::from_hex("abcd").unwrap_err(),
            Error::InvalidPrivateKey
        ));
        let bad = "zz95f91dbb2c04d7f7b8eba83a92f4f34e0bc3a0d5cd9f7db5c5e9a3f8c2b1a0";
        assert!(matches!(
            PrivateKey::from_hex(bad).unwrap_err(),
            Error::InvalidPrivateKey
        ));
        // The zero scalar is not a valid key.
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_address_derivation_is_deterministic() {
        let key = PrivateKey::from_hex(
            "4d95f91dbb2c04d7f7b8eba83a92f4f34e0bc3a0d5cd9f7db5c5e9a3f8c2b1a0",
        )
        .unwrap();
        let address = key.address();
        assert_eq!(address, key.address());
        assert!(address.to_base58().starts_with('T'));
        assert_eq!(address.as_bytes()[0], 0x41);
    }

    #[test]
    fn test_debug_hides_key_material() {
        let key = PrivateKey::random();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains(&key.to_hex()));
    }

    // ========================================================================
    // Signing tests
    // ========================================================================

    #[test]
    fn test_txid_is_digest_of_raw_data() {
        let tx = sample_tx();
        let id = txid(&tx).unwrap();
        assert_eq!(id.len(), 32);

        let expected = Sha256::digest(tx.raw_data.as_ref().unwrap().encode_to_vec());
        assert_eq!(id, expected.to_vec());
    }

    #[test]
    fn test_txid_requires_raw_data() {
        let tx = core::Transaction::default();
        assert!(matches!(txid(&tx).unwrap_err(), Error::InvalidTransaction));
    }

    #[test]
    fn test_sign_transaction_appends_65_byte_signature() {
        let key = PrivateKey::random();
        let mut tx = sample_tx();

        key.sign_transaction(&mut tx).unwrap();
        key.sign_transaction(&mut tx).unwrap();

        assert_eq!(tx.signature.len(), 2);
        assert_eq!(tx.signature[0].len(), 65);
        // RFC 6979 nonces make repeat signatures identical.
        assert_eq!(tx.signature[0], tx.signature[1]);
    }

    #[test]
    fn test_signature_recovers_signing_key() {
        let key = PrivateKey::random();
        let mut tx = sample_tx();
        key.sign_transaction(&mut tx).unwrap();

        let digest = txid(&tx).unwrap();
        let bytes = &tx.signature[0];
        let signature = Signature::from_slice(&bytes[..64]).unwrap();
        let recovery_id = RecoveryId::from_byte(bytes[64]).unwrap();

        let recovered =
            VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id).unwrap();
        assert_eq!(&recovered, key.public_key());
        assert_eq!(Address::from_public_key(&recovered), key.address());
    }

    #[test]
    fn test_sign_transaction_requires_raw_data() {
        let key = PrivateKey::random();
        let mut tx = core::Transaction::default();
        assert!(key.sign_transaction(&mut tx).is_err());
        assert!(tx.signature.is_empty());
    }
}
