//! Errors raised by game transitions

use super::GamePhase;
use thiserror::Error;

/// Game transition errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Submit with an input shorter than the target; the player can fix this
    #[error("Guess must be {expected} letters")]
    InvalidSubmission { expected: usize, actual: usize },

    /// A transition requested from a phase that does not allow it
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: GamePhase,
    },

    /// A session needs at least one dish to play
    #[error("Cannot start a game with an empty playlist")]
    EmptyPlaylist,
}

impl GameError {
    /// Check if this error comes from player input rather than a caller bug
    ///
    /// Recoverable errors are shown to the player and the game continues.
    /// Everything else means the controller issued an impossible transition.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidSubmission { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_submission_message() {
        let err = GameError::InvalidSubmission {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Guess must be 5 letters");
        assert!(err.is_recoverable());
    }

    #[test]
    fn transition_errors_are_fatal() {
        let err = GameError::InvalidTransition {
            action: "advance to the next level",
            phase: GamePhase::Playing,
        };
        assert_eq!(
            err.to_string(),
            "Cannot advance to the next level while playing"
        );
        assert!(!err.is_recoverable());
        assert!(!GameError::EmptyPlaylist.is_recoverable());
    }
}
