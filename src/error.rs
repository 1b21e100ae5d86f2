//! Error types for FairDice

use thiserror::Error;

/// Main error type for FairDice
#[derive(Error, Debug)]
pub enum FairDiceError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Dice must have at least one face")]
    EmptyDice,

    // Interactive errors
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid game state transition: {0}")]
    InvalidStateTransition(String),

    // Cryptography errors
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Unknown keyed-hash algorithm: {0}")]
    UnknownAlgorithm(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Input error: {0}")]
    LineCodec(#[from] tokio_util::codec::LinesCodecError),
}

/// Result type alias for FairDice operations
pub type Result<T> = std::result::Result<T, FairDiceError>;
