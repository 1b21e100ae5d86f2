//! Dice definitions parsed from the command line

use crate::error::{FairDiceError, Result};
use std::fmt;
use std::str::FromStr;

/// Fewest dice a game can be played with
pub const MIN_DICE: usize = 3;

/// Sum of a dice's faces; empty dice are rejected
pub fn sum(faces: &[u64]) -> Result<u64> {
    if faces.is_empty() {
        return Err(FairDiceError::EmptyDice);
    }

    faces
        .iter()
        .try_fold(0u64, |acc, face| acc.checked_add(*face))
        .ok_or_else(|| FairDiceError::Configuration("dice sum overflows".to_string()))
}

/// A dice: an ordered, non-empty list of non-negative faces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dice {
    faces: Vec<u64>,
    total: u64,
}

impl Dice {
    pub fn new(faces: Vec<u64>) -> Result<Self> {
        let total = sum(&faces)?;
        Ok(Self { faces, total })
    }

    pub fn faces(&self) -> &[u64] {
        &self.faces
    }

    /// Sum of all faces
    pub fn sum(&self) -> u64 {
        self.total
    }
}

impl FromStr for Dice {
    type Err = FairDiceError;

    /// Accepts `^\d+(,\d+)*$`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            FairDiceError::Configuration(format!(
                "Invalid dice configuration '{}'. Please use comma-separated integers.",
                s
            ))
        };

        let faces = s
            .split(',')
            .map(|face| {
                if face.is_empty() || !face.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                face.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>>>()?;

        Dice::new(faces)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|face| face.to_string()).collect();
        write!(f, "{}", faces.join(","))
    }
}

/// Validate and parse the full set of dice arguments
pub fn parse_dice_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Dice>> {
    if args.len() < MIN_DICE {
        return Err(FairDiceError::Configuration(format!(
            "Please provide at least {} dice configurations.",
            MIN_DICE
        )));
    }

    args.iter().map(|arg| arg.as_ref().parse()).collect()
}
