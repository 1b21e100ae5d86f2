//! Dice parsing, sums and win probabilities

pub mod probability;
pub mod types;

pub use probability::{win_probabilities, WinProbability};
pub use types::{parse_dice_args, sum, Dice, MIN_DICE};
