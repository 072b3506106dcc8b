//! Guess-the-dish game engine
//!
//! `GameSession` holds the rules, `controller` turns player intents into
//! session transitions and outcomes.

pub mod controller;
mod error;
mod session;

pub use controller::{GameController, Intent, Outcome, apply};
pub use error::GameError;
pub use session::{GamePhase, GameSession, MAX_ATTEMPTS, Snapshot};
