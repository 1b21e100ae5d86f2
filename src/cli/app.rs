//! FairDice application wiring the game to the terminal

use crate::crypto::{HashAlgorithm, Reveal};
use crate::dice::parse_dice_args;
use crate::error::Result;
use crate::game::{Console, GameEngine, GameState};
use rand::rngs::OsRng;
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, LinesCodec};
use tokio_util::sync::CancellationToken;

/// Main FairDice application
#[derive(Clone)]
pub struct FairDiceApp {
    algorithm: HashAlgorithm,
    cancel: CancellationToken,
}

impl FairDiceApp {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            cancel: CancellationToken::new(),
        }
    }

    /// Token cancelled when the user interrupts the session
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel the session on Ctrl+C
    pub fn listen_for_interrupt(&self) -> JoinHandle<()> {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received");
                cancel.cancel();
            }
        })
    }

    /// Validate the dice and play one round on stdin/stdout
    pub async fn play<S: AsRef<str>>(&self, dice_args: &[S]) -> Result<GameState> {
        // Configuration errors surface before any commitment exists
        let dice = parse_dice_args(dice_args)?;
        tracing::info!(dice = dice.len(), algorithm = %self.algorithm, "Starting game");

        let input = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        let console = Console::new(input, tokio::io::stdout(), self.cancel.clone());
        let mut engine = GameEngine::new(console, OsRng, self.algorithm);

        engine.play(dice).await
    }

    /// Load a proof printed by `play`; call [`Reveal::verify`] on the result
    pub fn parse_proof(proof_json: &str) -> Result<Reveal> {
        let reveal = Reveal::from_json(proof_json)?;
        tracing::debug!(algorithm = %reveal.algorithm, "Loaded proof");
        Ok(reveal)
    }
}
