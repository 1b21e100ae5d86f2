//! Cryptographic types for FairDice

use crate::error::{FairDiceError, Result};
use blake2::Blake2b512;
use hmac::{Hmac, Mac, SimpleHmac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

/// Length of a commitment key in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret HMAC key bound to a single commitment
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from a cryptographically secure source
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut key = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut key)
            .map_err(|e| FairDiceError::RandomnessUnavailable(e.to_string()))?;
        Ok(SecretKey(key))
    }

    /// Create key from bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        SecretKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Get key as hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create key from hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        if bytes.len() != KEY_LEN {
            return Err(hex::FromHexError::InvalidStringLength.into());
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        Ok(SecretKey(key))
    }

    /// Bytes handed to the MAC: the disclosed hex text, so that anyone holding
    /// the printed key can recompute the digest with stock tools.
    pub(crate) fn mac_material(&self) -> Vec<u8> {
        self.to_hex().into_bytes()
    }
}

// Never print key material through Debug.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

impl From<SecretKey> for String {
    fn from(key: SecretKey) -> Self {
        key.to_hex()
    }
}

impl TryFrom<String> for SecretKey {
    type Error = FairDiceError;

    fn try_from(value: String) -> Result<Self> {
        SecretKey::from_hex(&value)
    }
}

/// Keyed-hash output published before the reveal
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get digest as hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Create digest from hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Ok(Digest(hex::decode(hex_str)?))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for Digest {
    type Error = FairDiceError;

    fn try_from(value: String) -> Result<Self> {
        Digest::from_hex(&value)
    }
}

/// HMAC constructions a commitment can be published under
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "blake2b")]
    Blake2b512,
}

impl HashAlgorithm {
    /// Name used on the command line and in proofs
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake2b512 => "blake2b",
        }
    }

    /// Human-readable label, e.g. `HMAC-SHA3-256`
    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "HMAC-SHA3-256",
            HashAlgorithm::Sha256 => "HMAC-SHA256",
            HashAlgorithm::Blake2b512 => "HMAC-BLAKE2b-512",
        }
    }

    /// Compute the keyed hash of `message`
    pub fn mac(&self, key: &[u8], message: &[u8]) -> Digest {
        let bytes = match self {
            HashAlgorithm::Sha3_256 => compute::<Hmac<Sha3_256>>(key, message),
            HashAlgorithm::Sha256 => compute::<Hmac<Sha256>>(key, message),
            // BLAKE2 does not expose a block-level core, hence SimpleHmac
            HashAlgorithm::Blake2b512 => compute::<SimpleHmac<Blake2b512>>(key, message),
        };
        Digest(bytes)
    }

    /// Constant-time comparison of a recomputed keyed hash against `expected`
    pub fn verify(&self, key: &[u8], message: &[u8], expected: &Digest) -> bool {
        match self {
            HashAlgorithm::Sha3_256 => check::<Hmac<Sha3_256>>(key, message, expected),
            HashAlgorithm::Sha256 => check::<Hmac<Sha256>>(key, message, expected),
            HashAlgorithm::Blake2b512 => check::<SimpleHmac<Blake2b512>>(key, message, expected),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = FairDiceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "sha256" | "sha2" => Ok(HashAlgorithm::Sha256),
            "blake2b" | "blake2b-512" => Ok(HashAlgorithm::Blake2b512),
            other => Err(FairDiceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

fn new_mac<M: Mac + hmac::digest::KeyInit>(key: &[u8]) -> M {
    <M as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length")
}

fn compute<M: Mac + hmac::digest::KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = new_mac::<M>(key);
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

fn check<M: Mac + hmac::digest::KeyInit>(key: &[u8], message: &[u8], expected: &Digest) -> bool {
    let mut mac = new_mac::<M>(key);
    mac.update(message);
    mac.verify_slice(expected.as_bytes()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_hex_conversion() {
        let key = SecretKey::from_bytes([42u8; KEY_LEN]);

        let hex = key.to_hex();
        assert_eq!(hex.len(), KEY_LEN * 2);
        assert_eq!(SecretKey::from_hex(&hex).unwrap(), key);
    }

    #[test]
    fn test_key_from_hex_rejects_wrong_length() {
        let result = SecretKey::from_hex("abcd");
        assert!(matches!(result, Err(FairDiceError::HexDecode(_))));
    }

    #[test]
    fn test_random_keys_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let key1 = SecretKey::random(&mut rng).unwrap();
        let key2 = SecretKey::random(&mut rng).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = SecretKey::from_bytes([7u8; KEY_LEN]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_hex()));
    }

    #[test]
    fn test_mac_material_is_hex_text() {
        let key = SecretKey::from_bytes([0xabu8; KEY_LEN]);
        assert_eq!(key.mac_material(), "ab".repeat(KEY_LEN).into_bytes());
    }

    #[test]
    fn test_hmac_sha256_known_answer() {
        // RFC 4231 test case 2
        let digest = HashAlgorithm::Sha256.mac(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            digest.to_hex(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(HashAlgorithm::Sha3_256.mac(b"k", b"1").as_bytes().len(), 32);
        assert_eq!(HashAlgorithm::Sha256.mac(b"k", b"1").as_bytes().len(), 32);
        assert_eq!(HashAlgorithm::Blake2b512.mac(b"k", b"1").as_bytes().len(), 64);
    }

    #[test]
    fn test_algorithms_disagree() {
        let sha3 = HashAlgorithm::Sha3_256.mac(b"key", b"0");
        let sha2 = HashAlgorithm::Sha256.mac(b"key", b"0");
        assert_ne!(sha3, sha2);
    }

    #[test]
    fn test_verify_matches_mac() {
        for algorithm in [
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha256,
            HashAlgorithm::Blake2b512,
        ] {
            let digest = algorithm.mac(b"key", b"1");
            assert!(algorithm.verify(b"key", b"1", &digest));
            assert!(!algorithm.verify(b"key", b"0", &digest));
            assert!(!algorithm.verify(b"other", b"1", &digest));
        }
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("sha3-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!("SHA256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("blake2b".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake2b512);
        assert!(matches!(
            "md5".parse::<HashAlgorithm>(),
            Err(FairDiceError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_digest_serialization() {
        let digest = HashAlgorithm::Sha256.mac(b"key", b"1");
        let serialized = serde_json::to_string(&digest).unwrap();
        assert_eq!(serialized, format!("\"{}\"", digest.to_hex()));
        let deserialized: Digest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(digest, deserialized);
    }
}
