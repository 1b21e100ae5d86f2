//! CLI module for FairDice

pub mod app;
pub mod commands;

pub use app::FairDiceApp;
pub use commands::{Cli, Commands};
