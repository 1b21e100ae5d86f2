//! Line-oriented prompt I/O with cooperative cancellation

use crate::error::Result;
use futures::{Stream, StreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::codec::LinesCodecError;
use tokio_util::sync::CancellationToken;

use super::types::Input;

/// Prompt text shown at every decision point
pub const PROMPT: &str = "Your selection: ";

/// Reads user lines from `input` and writes the transcript to `output`
pub struct Console<I, O> {
    input: I,
    output: O,
    cancel: CancellationToken,
}

impl<I, O> Console<I, O>
where
    I: Stream<Item = std::result::Result<String, LinesCodecError>> + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(input: I, output: O, cancel: CancellationToken) -> Self {
        Self {
            input,
            output,
            cancel,
        }
    }

    /// Write one line of output
    pub async fn say(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Show `message` and wait for the next line.
    ///
    /// End of input and cancellation both read as [`Input::Exit`].
    pub async fn prompt(&mut self, message: &str) -> Result<Input> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.flush().await?;

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!("Prompt cancelled");
                self.say("").await?;
                Ok(Input::Exit)
            }
            line = self.input.next() => match line {
                Some(Ok(line)) => Ok(Input::parse(&line)),
                Some(Err(e)) => Err(e.into()),
                None => {
                    tracing::debug!("Input closed");
                    self.say("").await?;
                    Ok(Input::Exit)
                }
            },
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
