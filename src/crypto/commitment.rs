//! Commit-reveal scheme deciding who moves first

use crate::error::Result;
use crate::types::{Bit, Party};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::random::random_bit;
use super::types::{Digest, HashAlgorithm, SecretKey};

/// A secret bit bound to a published keyed hash.
///
/// Only the digest and algorithm are readable while the commitment is alive.
/// The key and outcome come out through [`Commitment::resolve_first_move`],
/// which consumes the commitment.
#[derive(Clone)]
pub struct Commitment {
    key: SecretKey,
    outcome: Bit,
    algorithm: HashAlgorithm,
    digest: Digest,
}

impl Commitment {
    /// Generate a commitment from a cryptographically secure source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, algorithm: HashAlgorithm) -> Result<Self> {
        let key = SecretKey::random(rng)?;
        let outcome = random_bit(rng)?;
        Ok(Self::from_parts(key, outcome, algorithm))
    }

    /// Build a commitment for a known key and outcome
    pub fn from_parts(key: SecretKey, outcome: Bit, algorithm: HashAlgorithm) -> Self {
        let digest = compute_digest(algorithm, &key, outcome);
        Self {
            key,
            outcome,
            algorithm,
            digest,
        }
    }

    /// Digest safe to publish before the guess
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Check a claimed opening against this commitment's digest
    pub fn verify(&self, claimed_key: &SecretKey, claimed_outcome: Bit) -> bool {
        verify(self, claimed_key, claimed_outcome)
    }

    /// Compare the guess with the committed bit and open the commitment
    pub fn resolve_first_move(self, guess: Bit) -> FirstMove {
        let first = if guess == self.outcome {
            Party::User
        } else {
            Party::Computer
        };

        FirstMove {
            first,
            reveal: Reveal {
                algorithm: self.algorithm,
                key: self.key,
                outcome: self.outcome,
                digest: self.digest,
            },
        }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("algorithm", &self.algorithm)
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// Who moves first, plus everything needed to audit the decision
#[derive(Clone, Debug)]
pub struct FirstMove {
    pub first: Party,
    pub reveal: Reveal,
}

/// Opened commitment, printed to the user after the guess
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub algorithm: HashAlgorithm,
    pub key: SecretKey,
    pub outcome: Bit,
    pub digest: Digest,
}

impl Reveal {
    /// Recompute the digest from the disclosed key and outcome
    pub fn verify(&self) -> bool {
        self.algorithm
            .verify(&self.key.mac_material(), self.outcome.as_str().as_bytes(), &self.digest)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Generate a commitment with OS randomness and the default algorithm
pub fn generate_commitment() -> Result<Commitment> {
    Commitment::generate(&mut OsRng, HashAlgorithm::default())
}

/// Compute KeyedHash(key, encode(outcome))
pub fn compute_digest(algorithm: HashAlgorithm, key: &SecretKey, outcome: Bit) -> Digest {
    algorithm.mac(&key.mac_material(), outcome.as_str().as_bytes())
}

/// Verify a claimed opening of a commitment
pub fn verify(commitment: &Commitment, claimed_key: &SecretKey, claimed_outcome: Bit) -> bool {
    commitment.algorithm.verify(
        &claimed_key.mac_material(),
        claimed_outcome.as_str().as_bytes(),
        &commitment.digest,
    )
}

/// Resolve the first move, always disclosing the key
pub fn resolve_first_move(commitment: Commitment, guess: Bit) -> FirstMove {
    commitment.resolve_first_move(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::testing::BrokenRng;
    use crate::crypto::types::KEY_LEN;
    use crate::error::FairDiceError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_commitment_generation() {
        let commitment = generate_commitment().unwrap();

        assert_eq!(commitment.algorithm(), HashAlgorithm::Sha3_256);
        assert_eq!(commitment.digest().as_bytes().len(), 32);
    }

    #[test]
    fn test_commitment_verification() {
        for algorithm in [
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha256,
            HashAlgorithm::Blake2b512,
        ] {
            let commitment = Commitment::generate(&mut OsRng, algorithm).unwrap();
            let key = commitment.key.clone();
            let outcome = commitment.outcome;

            // Correct opening should verify
            assert!(verify(&commitment, &key, outcome));
        }
    }

    #[test]
    fn test_commitment_verification_fails_wrong_outcome() {
        let commitment = generate_commitment().unwrap();
        let key = commitment.key.clone();
        let outcome = commitment.outcome;

        assert!(!commitment.verify(&key, outcome.flipped()));
    }

    #[test]
    fn test_commitment_verification_fails_wrong_key() {
        let commitment = generate_commitment().unwrap();
        let outcome = commitment.outcome;

        // Flip one bit in every byte position of the key
        for i in 0..KEY_LEN {
            let mut bytes = *commitment.key.as_bytes();
            bytes[i] ^= 0x01;
            let mutated = SecretKey::from_bytes(bytes);
            assert!(!commitment.verify(&mutated, outcome));
        }

        let fresh = SecretKey::random(&mut OsRng).unwrap();
        assert!(!commitment.verify(&fresh, outcome));
    }

    #[test]
    fn test_commitment_hash_deterministic() {
        let key = SecretKey::from_bytes([42u8; KEY_LEN]);

        let digest1 = compute_digest(HashAlgorithm::Sha3_256, &key, Bit::One);
        let digest2 = compute_digest(HashAlgorithm::Sha3_256, &key, Bit::One);
        assert_eq!(digest1, digest2);

        let other = compute_digest(HashAlgorithm::Sha3_256, &key, Bit::Zero);
        assert_ne!(digest1, other);
    }

    #[test]
    fn test_fresh_key_per_commitment() {
        let mut rng = StdRng::seed_from_u64(11);
        let c1 = Commitment::generate(&mut rng, HashAlgorithm::Sha3_256).unwrap();
        let c2 = Commitment::generate(&mut rng, HashAlgorithm::Sha3_256).unwrap();
        assert_ne!(c1.key, c2.key);
    }

    #[test]
    fn test_outcome_distribution_is_uniform() {
        let trials = 10_000;
        let mut ones = 0u32;
        for _ in 0..trials {
            if generate_commitment().unwrap().outcome == Bit::One {
                ones += 1;
            }
        }

        let expected = trials as f64 / 2.0;
        let ones = ones as f64;
        let zeros = trials as f64 - ones;
        let chi_square =
            (ones - expected).powi(2) / expected + (zeros - expected).powi(2) / expected;

        // Critical value for one degree of freedom at p = 0.0001
        assert!(chi_square < 15.14, "chi-square {} too large", chi_square);
    }

    #[test]
    fn test_resolve_first_move() {
        let key = SecretKey::from_bytes([9u8; KEY_LEN]);
        let commitment = Commitment::from_parts(key.clone(), Bit::One, HashAlgorithm::Sha3_256);

        let hit = commitment.clone().resolve_first_move(Bit::One);
        assert_eq!(hit.first, Party::User);

        let miss = resolve_first_move(commitment, Bit::Zero);
        assert_eq!(miss.first, Party::Computer);

        // Both paths disclose the same key
        assert_eq!(hit.reveal.key, key);
        assert_eq!(miss.reveal.key, key);
        assert_eq!(hit.reveal.outcome, Bit::One);
        assert!(hit.reveal.verify());
        assert!(miss.reveal.verify());
    }

    #[test]
    fn test_tampered_reveal_fails() {
        let commitment = generate_commitment().unwrap();
        let mut reveal = commitment.resolve_first_move(Bit::Zero).reveal;
        reveal.outcome = reveal.outcome.flipped();
        assert!(!reveal.verify());
    }

    #[test]
    fn test_reveal_json_roundtrip_verifies() {
        let commitment = generate_commitment().unwrap();
        let reveal = commitment.resolve_first_move(Bit::One).reveal;

        let json = reveal.to_json().unwrap();
        assert!(json.contains("\"algorithm\":\"sha3-256\""));

        let parsed = Reveal::from_json(&json).unwrap();
        assert_eq!(parsed, reveal);
        assert!(parsed.verify());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let key = SecretKey::from_bytes([5u8; KEY_LEN]);
        let commitment = Commitment::from_parts(key.clone(), Bit::One, HashAlgorithm::Sha256);
        let debug = format!("{:?}", commitment);
        assert!(!debug.contains(&key.to_hex()));
        assert!(!debug.contains("One"));
    }

    #[test]
    fn test_generation_without_entropy_fails() {
        let result = Commitment::generate(&mut BrokenRng, HashAlgorithm::Sha3_256);
        assert!(matches!(
            result,
            Err(FairDiceError::RandomnessUnavailable(_))
        ));
    }
}
