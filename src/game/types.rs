//! Game states

use crate::types::{GameResult, Party};
use serde::{Deserialize, Serialize};

/// Game session state machine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Digest published, waiting for the user's guess
    AwaitingGuess,
    /// First move decided, waiting for the user to pick a dice
    AwaitingDiceChoice { first: Party },
    /// Both dice chosen and compared
    Resolved { result: GameResult },
    /// User quit (or input ended) before the round finished
    Exited,
}

impl GameState {
    /// Check if the session is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Resolved { .. } | GameState::Exited)
    }
}

/// One line of user input at a prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Exit,
    Help,
    Value(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "X" | "x" => Input::Exit,
            "?" => Input::Help,
            other => Input::Value(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_terminal() {
        assert!(GameState::Exited.is_terminal());
        assert!(GameState::Resolved {
            result: GameResult::Tie
        }
        .is_terminal());
        assert!(!GameState::AwaitingGuess.is_terminal());
        assert!(!GameState::AwaitingDiceChoice {
            first: Party::User
        }
        .is_terminal());
    }

    #[test]
    fn test_input_parse() {
        assert_eq!(Input::parse("X"), Input::Exit);
        assert_eq!(Input::parse(" x \r"), Input::Exit);
        assert_eq!(Input::parse("?"), Input::Help);
        assert_eq!(Input::parse(" 2 "), Input::Value("2".to_string()));
        assert_eq!(Input::parse(""), Input::Value(String::new()));
    }
}
