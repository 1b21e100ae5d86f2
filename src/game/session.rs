//! Game session management

use crate::crypto::{Commitment, Digest, FirstMove, HashAlgorithm};
use crate::dice::{Dice, MIN_DICE};
use crate::error::{FairDiceError, Result};
use crate::types::{Bit, GameResult, Party};

use super::types::GameState;

/// One round of the game: the committed first-move bit and the dice pool
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    remaining: Vec<Dice>,
    commitment: Option<Commitment>,
    user_dice: Option<Dice>,
    computer_dice: Option<Dice>,
}

impl GameSession {
    /// Create new session waiting for the user's guess
    pub fn new(dice: Vec<Dice>, commitment: Commitment) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(FairDiceError::Configuration(format!(
                "Please provide at least {} dice configurations.",
                MIN_DICE
            )));
        }

        Ok(Self {
            state: GameState::AwaitingGuess,
            remaining: dice,
            commitment: Some(commitment),
            user_dice: None,
            computer_dice: None,
        })
    }

    /// Get current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Dice nobody has taken yet
    pub fn remaining(&self) -> &[Dice] {
        &self.remaining
    }

    /// Published digest, available until the commitment is opened
    pub fn digest(&self) -> Option<&Digest> {
        self.commitment.as_ref().map(Commitment::digest)
    }

    pub fn algorithm(&self) -> Option<HashAlgorithm> {
        self.commitment.as_ref().map(Commitment::algorithm)
    }

    pub fn user_dice(&self) -> Option<&Dice> {
        self.user_dice.as_ref()
    }

    pub fn computer_dice(&self) -> Option<&Dice> {
        self.computer_dice.as_ref()
    }

    /// Open the commitment against the user's guess
    pub fn resolve_guess(&mut self, guess: Bit) -> Result<FirstMove> {
        if self.state != GameState::AwaitingGuess {
            return Err(FairDiceError::InvalidStateTransition(
                "Guess already resolved".to_string(),
            ));
        }

        let commitment = self.commitment.take().ok_or_else(|| {
            FairDiceError::InvalidStateTransition("Commitment already opened".to_string())
        })?;

        let first_move = commitment.resolve_first_move(guess);
        self.state = GameState::AwaitingDiceChoice {
            first: first_move.first,
        };
        Ok(first_move)
    }

    /// Turn raw menu input into an index of a remaining dice
    pub fn parse_selection(&self, input: &str) -> Result<usize> {
        let index: usize = input
            .trim()
            .parse()
            .map_err(|_| FairDiceError::InvalidSelection(format!("'{}' is not a number", input)))?;

        if index >= self.remaining.len() {
            return Err(FairDiceError::InvalidSelection(format!(
                "{} is out of range 0..{}",
                index,
                self.remaining.len()
            )));
        }

        Ok(index)
    }

    /// User takes a dice; invalid input leaves the session untouched
    pub fn choose_user_dice(&mut self, input: &str) -> Result<&Dice> {
        self.expect_choice_pending(Party::User, self.user_dice.is_some())?;
        let index = self.parse_selection(input)?;
        let dice = self.remaining.remove(index);
        Ok(&*self.user_dice.insert(dice))
    }

    /// Computer takes the dice at `index`
    pub fn choose_computer_dice(&mut self, index: usize) -> Result<&Dice> {
        self.expect_choice_pending(Party::Computer, self.computer_dice.is_some())?;
        if index >= self.remaining.len() {
            return Err(FairDiceError::InvalidSelection(format!(
                "{} is out of range 0..{}",
                index,
                self.remaining.len()
            )));
        }

        let dice = self.remaining.remove(index);
        Ok(&*self.computer_dice.insert(dice))
    }

    /// Compare both dice and finish the round
    pub fn finish(&mut self) -> Result<GameResult> {
        let (user, computer) = match (&self.user_dice, &self.computer_dice) {
            (Some(user), Some(computer)) => (user, computer),
            _ => {
                return Err(FairDiceError::InvalidStateTransition(
                    "Both parties must choose a dice first".to_string(),
                ))
            }
        };

        let result = GameResult::from_sums(user.sum(), computer.sum());
        self.state = GameState::Resolved { result };
        Ok(result)
    }

    /// Stop the session; the commitment may stay unopened
    pub fn exit(&mut self) {
        self.state = GameState::Exited;
    }

    fn expect_choice_pending(&self, party: Party, already_chosen: bool) -> Result<()> {
        if !matches!(self.state, GameState::AwaitingDiceChoice { .. }) {
            return Err(FairDiceError::InvalidStateTransition(
                "Dice can only be chosen after the first move is decided".to_string(),
            ));
        }

        if already_chosen {
            return Err(FairDiceError::InvalidStateTransition(format!(
                "{:?} already chose a dice",
                party
            )));
        }

        Ok(())
    }
}
