//! FairDice
//!
//! A dice game where the first move is settled by a commit-reveal coin flip:
//! - HMAC commitments to a random bit, published before the guess
//! - Key disclosure and proof verification after the guess
//! - Dice parsing and win-probability hints
//! - An interactive session state machine with cooperative cancellation

pub mod cli;
pub mod crypto;
pub mod dice;
pub mod error;
pub mod game;
pub mod types;

// Re-export commonly used types and functions
pub use crypto::{
    compute_digest, generate_commitment, resolve_first_move, verify, Commitment, Digest,
    FirstMove, HashAlgorithm, Reveal, SecretKey,
};
pub use dice::{sum, win_probabilities, Dice};
pub use error::{FairDiceError, Result};
pub use game::{GameEngine, GameSession, GameState};
pub use types::{Bit, GameResult, Party};
