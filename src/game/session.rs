//! Game session state and transitions
//!
//! A `GameSession` is an immutable value. Every transition borrows the current
//! session and returns the next one, so a rejected transition leaves the
//! caller's value untouched and old states can be kept around for undo.

use crate::core::{DishRecord, LetterSet, Reveal, disabled_letters, reveal_at, reveal_row};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::GameError;

/// Attempts granted at the start of every level
pub const MAX_ATTEMPTS: u8 = 3;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    /// Target guessed, more levels remain
    LevelWon,
    /// Out of attempts on the current level
    GameLost,
    /// Target guessed on the last level
    AllLevelsComplete,
}

impl GamePhase {
    /// Anything but `Playing` waits for a next-level or play-again action
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Playing => "playing",
            Self::LevelWon => "level won",
            Self::GameLost => "game lost",
            Self::AllLevelsComplete => "all levels complete",
        };
        f.write_str(text)
    }
}

/// One playthrough of an ordered playlist of dishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    playlist: Arc<[DishRecord]>,
    level_index: usize,
    guesses: Vec<String>,
    current_input: String,
    attempts_remaining: u8,
    disabled: LetterSet,
    phase: GamePhase,
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub level_index: usize,
    pub level_count: usize,
    pub attempts_remaining: u8,
    pub reveals: Vec<Reveal>,
    pub disabled_letters: LetterSet,
    pub input_len: usize,
    pub target_len: usize,
    pub phase: GamePhase,
}

impl GameSession {
    /// Start a game at the first level
    ///
    /// # Errors
    /// Returns `GameError::EmptyPlaylist` if `playlist` has no dishes.
    pub fn new(playlist: impl Into<Arc<[DishRecord]>>) -> Result<Self, GameError> {
        let playlist = playlist.into();
        if playlist.is_empty() {
            return Err(GameError::EmptyPlaylist);
        }
        Ok(Self::at_level(playlist, 0))
    }

    fn at_level(playlist: Arc<[DishRecord]>, level_index: usize) -> Self {
        debug_assert!(level_index < playlist.len());
        Self {
            playlist,
            level_index,
            guesses: Vec::new(),
            current_input: String::new(),
            attempts_remaining: MAX_ATTEMPTS,
            disabled: LetterSet::EMPTY,
            phase: GamePhase::Playing,
        }
    }

    #[must_use]
    pub fn playlist(&self) -> &[DishRecord] {
        &self.playlist
    }

    #[inline]
    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.playlist.len()
    }

    #[inline]
    #[must_use]
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 == self.playlist.len()
    }

    /// The dish being guessed on the current level
    #[inline]
    #[must_use]
    pub fn target(&self) -> &DishRecord {
        &self.playlist[self.level_index]
    }

    /// Guesses submitted on this level, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Letters proven absent from the target on this level
    #[inline]
    #[must_use]
    pub const fn disabled_letters(&self) -> LetterSet {
        self.disabled
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// A submitted guess matched the target on this level
    #[inline]
    #[must_use]
    pub const fn has_won(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::LevelWon | GamePhase::AllLevelsComplete
        )
    }

    /// The last level was won
    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.phase, GamePhase::AllLevelsComplete)
    }

    #[inline]
    #[must_use]
    pub fn is_input_full(&self) -> bool {
        self.current_input.len() >= self.target().id.len()
    }

    #[must_use]
    pub fn reveal_at(&self, position: usize) -> Reveal {
        reveal_at(
            &self.target().id,
            &self.guesses,
            &self.current_input,
            position,
        )
    }

    #[must_use]
    pub fn reveal_row(&self) -> Vec<Reveal> {
        reveal_row(&self.target().id, &self.guesses, &self.current_input)
    }

    /// Append a letter to the input
    ///
    /// No-op when the input is already full, the game is not in `Playing`,
    /// `letter` is not an ASCII letter, or it has been ruled out.
    #[must_use]
    pub fn type_letter(&self, letter: char) -> Self {
        if self.phase.is_terminal() || self.is_input_full() || !self.accepts_letter(letter) {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_input.push(letter.to_ascii_uppercase());
        next
    }

    /// Whether `letter` is a typeable key right now
    #[must_use]
    pub fn accepts_letter(&self, letter: char) -> bool {
        u8::try_from(letter.to_ascii_uppercase())
            .is_ok_and(|key| key.is_ascii_alphabetic() && !self.disabled.contains(key))
    }

    /// Remove the last typed letter; no-op on empty input or outside `Playing`
    #[must_use]
    pub fn delete_letter(&self) -> Self {
        let mut next = self.clone();
        if !self.phase.is_terminal() {
            next.current_input.pop();
        }
        next
    }

    /// Submit the current input as a guess
    ///
    /// On success the guess is recorded, the disabled set grows by the
    /// guess's absent letters and the input is cleared. A match moves to
    /// `LevelWon` (or `AllLevelsComplete` on the last level); a miss costs one
    /// attempt and moves to `GameLost` when none remain.
    ///
    /// # Errors
    /// - `InvalidSubmission` if the input is shorter than the target
    /// - `InvalidTransition` if the level is already over
    pub fn submit(&self) -> Result<Self, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::InvalidTransition {
                action: "submit a guess",
                phase: self.phase,
            });
        }

        let target = &self.target().id;
        if self.current_input.len() != target.len() {
            return Err(GameError::InvalidSubmission {
                expected: target.len(),
                actual: self.current_input.len(),
            });
        }

        let mut next = self.clone();
        let guess = std::mem::take(&mut next.current_input);

        if target.matches(&guess) {
            next.phase = if self.is_last_level() {
                GamePhase::AllLevelsComplete
            } else {
                GamePhase::LevelWon
            };
        } else {
            next.attempts_remaining = next.attempts_remaining.saturating_sub(1);
            if next.attempts_remaining == 0 {
                next.phase = GamePhase::GameLost;
            }
        }

        next.disabled = disabled_letters(next.disabled, &guess, target);
        debug!(
            level = self.level_index,
            guess = %guess,
            attempts_remaining = next.attempts_remaining,
            phase = %next.phase,
            "guess submitted"
        );
        next.guesses.push(guess);

        Ok(next)
    }

    /// Move to the next dish after a level win
    ///
    /// # Errors
    /// Returns `InvalidTransition` unless the phase is `LevelWon`.
    pub fn advance_level(&self) -> Result<Self, GameError> {
        if self.phase != GamePhase::LevelWon {
            return Err(GameError::InvalidTransition {
                action: "advance to the next level",
                phase: self.phase,
            });
        }

        debug!(level = self.level_index + 1, "advancing level");
        Ok(Self::at_level(
            Arc::clone(&self.playlist),
            self.level_index + 1,
        ))
    }

    /// Start over from the first level with the same playlist
    #[must_use]
    pub fn restart(&self) -> Self {
        debug!(from_phase = %self.phase, "restarting game");
        Self::at_level(Arc::clone(&self.playlist), 0)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            level_index: self.level_index,
            level_count: self.level_count(),
            attempts_remaining: self.attempts_remaining,
            reveals: self.reveal_row(),
            disabled_letters: self.disabled,
            input_len: self.current_input.len(),
            target_len: self.target().id.len(),
            phase: self.phase,
        }
    }
}
