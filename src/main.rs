//! FairDice CLI binary

use clap::Parser;
use fairdice::cli::{Cli, Commands, FairDiceApp};
use fairdice::GameState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the game transcript
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { algorithm, dice } => {
            let app = FairDiceApp::new(algorithm);
            let interrupt = app.listen_for_interrupt();

            let state = app.play(dice.as_slice()).await?;
            interrupt.abort();
            tracing::debug!(?state, "Session finished");

            // A stdin read may still be blocked; don't wait on it
            if app.is_cancelled() && state == GameState::Exited {
                std::process::exit(130);
            }
        }

        Commands::Verify { proof } => {
            let reveal = FairDiceApp::parse_proof(&proof)?;
            if !reveal.verify() {
                anyhow::bail!(
                    "Proof does not match its digest: {} of outcome {} under KEY={} is not {}",
                    reveal.algorithm.label(),
                    reveal.outcome,
                    reveal.key.to_hex(),
                    reveal.digest
                );
            }
            println!(
                "Proof verified: {} committed to {} ({})",
                reveal.algorithm.label(),
                reveal.outcome,
                reveal.digest
            );
        }
    }

    Ok(())
}
