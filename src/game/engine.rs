//! Game engine drives one session from commitment to result

use crate::crypto::{random_index, Commitment, HashAlgorithm};
use crate::dice::{win_probabilities, Dice};
use crate::error::{FairDiceError, Result};
use crate::types::{Bit, Party};
use futures::Stream;
use rand::{CryptoRng, RngCore};
use tokio::io::AsyncWrite;
use tokio_util::codec::LinesCodecError;

use super::console::{Console, PROMPT};
use super::session::GameSession;
use super::types::{GameState, Input};

const GUESS_MENU: &str = "0 - 0\n1 - 1\nX - exit\n? - help";
const DICE_MENU_FOOTER: &str = "X - exit\n? - help";

/// Runs the interactive flow on top of a [`GameSession`]
pub struct GameEngine<I, O, R> {
    console: Console<I, O>,
    rng: R,
    algorithm: HashAlgorithm,
}

impl<I, O, R> GameEngine<I, O, R>
where
    I: Stream<Item = std::result::Result<String, LinesCodecError>> + Unpin,
    O: AsyncWrite + Unpin,
    R: RngCore + CryptoRng,
{
    pub fn new(console: Console<I, O>, rng: R, algorithm: HashAlgorithm) -> Self {
        Self {
            console,
            rng,
            algorithm,
        }
    }

    pub fn into_console(self) -> Console<I, O> {
        self.console
    }

    /// Play one round and return the terminal state
    pub async fn play(&mut self, dice: Vec<Dice>) -> Result<GameState> {
        self.console
            .say("Let's determine who makes the first move.")
            .await?;

        let commitment = Commitment::generate(&mut self.rng, self.algorithm)?;
        let mut session = GameSession::new(dice, commitment)?;

        loop {
            match session.state().clone() {
                GameState::AwaitingGuess => self.guess_step(&mut session).await?,
                GameState::AwaitingDiceChoice { first } => {
                    self.dice_step(&mut session, first).await?
                }
                terminal => return Ok(terminal),
            }
        }
    }

    async fn guess_step(&mut self, session: &mut GameSession) -> Result<()> {
        let (digest, algorithm) = match (session.digest(), session.algorithm()) {
            (Some(digest), Some(algorithm)) => (digest.clone(), algorithm),
            _ => {
                return Err(FairDiceError::InvalidStateTransition(
                    "No open commitment to guess against".to_string(),
                ))
            }
        };

        // Digest goes out strictly before the guess is read
        tracing::info!(algorithm = %algorithm, digest = %digest, "Commitment published");
        self.console
            .say(&format!(
                "I've selected a random number in the range 0..1 ({}: {}).",
                algorithm.label(),
                digest
            ))
            .await?;
        self.console.say("Try and guess my selection.").await?;
        self.console.say(GUESS_MENU).await?;

        loop {
            match self.console.prompt(PROMPT).await? {
                Input::Exit => return self.stop(session).await,
                Input::Help => self.show_help(session.remaining()).await?,
                Input::Value(value) => {
                    let Some(guess) = Bit::parse(&value) else {
                        self.console.say("Invalid input.").await?;
                        continue;
                    };

                    let first_move = session.resolve_guess(guess)?;
                    let reveal = &first_move.reveal;
                    tracing::info!(first = ?first_move.first, "First move resolved");

                    self.console
                        .say(&format!("I chose {} (KEY={})", reveal.outcome, reveal.key.to_hex()))
                        .await?;
                    self.console
                        .say(&format!("Proof: {}", reveal.to_json()?))
                        .await?;

                    match first_move.first {
                        Party::User => self.console.say("You make the first move.").await?,
                        Party::Computer => {
                            self.console.say("I make the first move.").await?;
                            let dice = self.computer_pick(session)?;
                            self.console
                                .say(&format!("I chose [{}] (Sum: {})", dice, dice.sum()))
                                .await?;
                            self.console.say("Your turn. Choose your dice.").await?;
                        }
                    }
                    return Ok(());
                }
            }
        }
    }

    async fn dice_step(&mut self, session: &mut GameSession, first: Party) -> Result<()> {
        let mut show_menu = true;

        let user_dice = loop {
            if show_menu {
                self.show_menu(session.remaining()).await?;
                show_menu = false;
            }

            match self.console.prompt(PROMPT).await? {
                Input::Exit => return self.stop(session).await,
                Input::Help => {
                    // Help lists only what is still on the table
                    self.show_help(session.remaining()).await?;
                    show_menu = true;
                }
                Input::Value(value) => match session.choose_user_dice(&value) {
                    Ok(dice) => break dice.clone(),
                    Err(FairDiceError::InvalidSelection(reason)) => {
                        tracing::debug!(%reason, "Rejected dice selection");
                        self.console.say("Invalid dice choice.").await?;
                    }
                    Err(e) => return Err(e),
                },
            }
        };

        self.console
            .say(&format!("You chose: [{}] (Sum: {})", user_dice, user_dice.sum()))
            .await?;

        if first == Party::User {
            let dice = self.computer_pick(session)?;
            self.console
                .say(&format!("Computer chose: [{}] (Sum: {})", dice, dice.sum()))
                .await?;
        }

        let result = session.finish()?;
        tracing::info!(?result, "Round resolved");
        self.console.say(&result.to_string()).await?;
        Ok(())
    }

    fn computer_pick(&mut self, session: &mut GameSession) -> Result<Dice> {
        let index = random_index(&mut self.rng, session.remaining().len())?;
        let dice = session.choose_computer_dice(index)?.clone();
        tracing::debug!(%dice, "Computer picked dice");
        Ok(dice)
    }

    async fn show_menu(&mut self, dice: &[Dice]) -> Result<()> {
        for (i, d) in dice.iter().enumerate() {
            self.console.say(&format!("{} - {}", i, d)).await?;
        }
        self.console.say(DICE_MENU_FOOTER).await
    }

    async fn show_help(&mut self, dice: &[Dice]) -> Result<()> {
        self.console.say("Win probabilities for each dice:").await?;
        for probability in win_probabilities(dice) {
            self.console.say(&probability.to_string()).await?;
        }
        self.console.say("").await?;
        self.console.say("Choose your dice wisely!").await
    }

    async fn stop(&mut self, session: &mut GameSession) -> Result<()> {
        session.exit();
        tracing::info!("Game stopped by user");
        self.console.say("Game stopped.").await
    }
}
