//! Interactive game flow

pub mod console;
pub mod engine;
pub mod session;
pub mod types;

pub use console::{Console, PROMPT};
pub use engine::GameEngine;
pub use session::GameSession;
pub use types::{GameState, Input};
