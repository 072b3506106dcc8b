//! Intent dispatch for the guessing game
//!
//! The controller owns no rules of its own. It maps player intents onto
//! session transitions and classifies the result into an `Outcome` the
//! front end can show. All invariants live in `GameSession`.

use super::{GameError, GamePhase, GameSession};
use crate::core::DishRecord;
use std::sync::Arc;
use tracing::{error, info};

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    KeyTapped(char),
    Delete,
    Submit,
    Hint,
    NextLevel,
    PlayAgain,
}

/// What the front end should show after an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep playing, nothing to announce
    Continue,
    /// The guess did not have the target's letter count
    InvalidGuess { expected_len: usize },
    /// The guess used a letter already shown not to be in the dish
    RuledOutLetter { letter: char },
    /// Wrong full-length guess with attempts to spare
    WrongGuess { attempts_remaining: u8 },
    /// Current dish guessed, more remain
    LevelWon,
    /// Out of attempts; reveals the answer
    GameOver { answer: String },
    /// Last dish guessed
    AllComplete,
    /// The current dish's fact
    Hint(String),
}

impl Outcome {
    /// Message to show the player, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Continue => None,
            Self::InvalidGuess { expected_len } => {
                Some(format!("Guess must be {expected_len} letters"))
            }
            Self::RuledOutLetter { letter } => {
                Some(format!("'{letter}' is not in this dish"))
            }
            Self::WrongGuess { attempts_remaining } => Some(format!(
                "Wrong guess! {attempts_remaining} {} left",
                if *attempts_remaining == 1 {
                    "attempt"
                } else {
                    "attempts"
                }
            )),
            Self::LevelWon => Some("You guessed it! Ready for the next one?".to_string()),
            Self::GameOver { answer } => Some(format!("The word was '{answer}'. Try again!")),
            Self::AllComplete => {
                Some("Congratulations! You've completed all the dishes!".to_string())
            }
            Self::Hint(fact) => Some(fact.clone()),
        }
    }
}

/// Apply one intent to a session
///
/// Returns the next session and the outcome to surface. A short submission
/// is reported as `Outcome::InvalidGuess` with the session unchanged.
///
/// # Errors
/// Returns `InvalidTransition` for actions the current phase does not allow,
/// such as `NextLevel` while still playing.
pub fn apply(session: &GameSession, intent: Intent) -> Result<(GameSession, Outcome), GameError> {
    match intent {
        Intent::KeyTapped(letter) => Ok((session.type_letter(letter), Outcome::Continue)),
        Intent::Delete => Ok((session.delete_letter(), Outcome::Continue)),
        Intent::Hint => Ok((session.clone(), Outcome::Hint(session.target().fact.clone()))),
        Intent::NextLevel => Ok((session.advance_level()?, Outcome::Continue)),
        Intent::PlayAgain => Ok((session.restart(), Outcome::Continue)),
        Intent::Submit => match session.submit() {
            Ok(next) => {
                let outcome = classify(&next);
                Ok((next, outcome))
            }
            Err(GameError::InvalidSubmission { expected, .. }) => Ok((
                session.clone(),
                Outcome::InvalidGuess {
                    expected_len: expected,
                },
            )),
            Err(err) => Err(err),
        },
    }
}

fn classify(session: &GameSession) -> Outcome {
    match session.phase() {
        GamePhase::Playing => Outcome::WrongGuess {
            attempts_remaining: session.attempts_remaining(),
        },
        GamePhase::LevelWon => Outcome::LevelWon,
        GamePhase::GameLost => Outcome::GameOver {
            answer: session.target().id.text().to_string(),
        },
        GamePhase::AllLevelsComplete => Outcome::AllComplete,
    }
}

/// Owns the live session and replaces it on every intent
#[derive(Debug, Clone)]
pub struct GameController {
    session: GameSession,
}

impl GameController {
    /// Start a game over `playlist`
    ///
    /// # Errors
    /// Returns `GameError::EmptyPlaylist` if there is nothing to play.
    pub fn new(playlist: impl Into<Arc<[DishRecord]>>) -> Result<Self, GameError> {
        let session = GameSession::new(playlist)?;
        info!(levels = session.level_count(), "game started");
        Ok(Self { session })
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// Dispatch an intent, replacing the session on success
    ///
    /// # Errors
    /// Propagates `InvalidTransition`; the session is left as it was.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, GameError> {
        match apply(&self.session, intent) {
            Ok((next, outcome)) => {
                self.session = next;
                Ok(outcome)
            }
            Err(err) => {
                error!(?intent, phase = %self.session.phase(), "rejected intent: {err}");
                Err(err)
            }
        }
    }

    /// Type every character of `word`, in order
    pub fn type_word(&mut self, word: &str) {
        for letter in word.chars() {
            self.session = self.session.type_letter(letter);
        }
    }

    /// Submit `word` as one whole guess
    ///
    /// The input is cleared first and non-letters are dropped. A guess with
    /// the wrong letter count or a ruled-out letter is reported without
    /// costing an attempt.
    ///
    /// # Errors
    /// Propagates `InvalidTransition` when the level is already over.
    pub fn submit_word(&mut self, word: &str) -> Result<Outcome, GameError> {
        if self.session.phase() != GamePhase::Playing {
            return self.dispatch(Intent::Submit);
        }
        while !self.session.current_input().is_empty() {
            self.session = self.session.delete_letter();
        }

        let letters: Vec<char> = word.chars().filter(char::is_ascii_alphabetic).collect();
        let expected_len = self.session.target().id.len();
        if letters.len() != expected_len {
            return Ok(Outcome::InvalidGuess { expected_len });
        }
        if let Some(letter) = letters.iter().find(|&&c| !self.session.accepts_letter(c)) {
            return Ok(Outcome::RuledOutLetter {
                letter: letter.to_ascii_uppercase(),
            });
        }

        self.type_word(word);
        self.dispatch(Intent::Submit)
    }
}
