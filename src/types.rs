//! Core types used throughout FairDice

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single committed bit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Take the low bit of a random byte
    pub fn from_byte(byte: u8) -> Self {
        if byte & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Parse the exact menu entries `0` and `1`
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "0" => Some(Bit::Zero),
            "1" => Some(Bit::One),
            _ => None,
        }
    }

    /// Textual form that gets fed into the keyed hash
    pub fn as_str(&self) -> &'static str {
        match self {
            Bit::Zero => "0",
            Bit::One => "1",
        }
    }

    /// The other bit
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(format!("{} is not a bit", other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    User,
    Computer,
}

impl Party {
    pub fn other(self) -> Self {
        match self {
            Party::User => Party::Computer,
            Party::Computer => Party::User,
        }
    }
}

/// Result of comparing the two chosen dice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    UserWon,
    ComputerWon,
    Tie,
}

impl GameResult {
    /// Decide by comparing dice sums
    pub fn from_sums(user_sum: u64, computer_sum: u64) -> Self {
        match user_sum.cmp(&computer_sum) {
            std::cmp::Ordering::Greater => GameResult::UserWon,
            std::cmp::Ordering::Less => GameResult::ComputerWon,
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::UserWon => write!(f, "User won!"),
            GameResult::ComputerWon => write!(f, "Computer won!"),
            GameResult::Tie => write!(f, "It's a tie!"),
        }
    }
}
