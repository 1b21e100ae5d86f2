//! Commitment scheme and secure randomness

pub mod commitment;
pub mod random;
pub mod types;

pub use commitment::{
    compute_digest, generate_commitment, resolve_first_move, verify, Commitment, FirstMove, Reveal,
};
pub use random::{random_bit, random_index};
pub use types::{Digest, HashAlgorithm, SecretKey, KEY_LEN};
