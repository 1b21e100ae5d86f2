//! CLI command definitions

use crate::crypto::HashAlgorithm;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fairdice")]
#[command(about = "FairDice - provably fair non-transitive dice game", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a round against the computer
    Play {
        /// Keyed hash used for the first-move commitment (sha3-256, sha256, blake2b)
        #[arg(short, long, default_value = "sha3-256")]
        algorithm: HashAlgorithm,

        /// Dice definitions, e.g. 2,2,4,4,9,9 (at least 3)
        dice: Vec<String>,
    },

    /// Check a proof printed after the first-move reveal
    Verify {
        /// Proof JSON as printed by `play`
        #[arg(short, long)]
        proof: String,
    },
}
