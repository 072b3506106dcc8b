//! Guess evaluation: per-position reveal states and letters proven absent
//!
//! The rules are deliberately simpler than Wordle:
//! - A position is either revealed as correct, showing typed input, or blank.
//!   There is no "right letter, wrong place" class.
//! - A letter is disabled only when it occurs nowhere in the target. A letter
//!   that is in the target but was placed wrong stays usable.
//!
//! All functions here are pure; the game session owns the inputs.

use super::{DishName, LetterSet};

/// Display classification of one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Locked in by an earlier guess; never regresses within a level
    Correct,
    /// Shown from the in-progress input
    Typing,
    /// Nothing to show yet
    Blank,
}

/// The letter (if any) and state shown at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reveal {
    pub letter: Option<u8>,
    pub state: RevealState,
}

impl Reveal {
    pub const BLANK: Self = Self {
        letter: None,
        state: RevealState::Blank,
    };

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self.state, RevealState::Correct)
    }

    /// The letter as a display character, `_` when blank
    #[must_use]
    pub fn display_char(self) -> char {
        self.letter
            .map_or('_', |letter| char::from(letter.to_ascii_uppercase()))
    }
}

/// Compute what to show at `position`
///
/// 1. The first submitted guess (in submission order) whose letter at
///    `position` equals the target's letter wins, state `Correct`.
/// 2. Otherwise the in-progress input's letter, state `Typing`.
/// 3. Otherwise `Blank`.
///
/// Guesses shorter than `position` are skipped rather than rejected.
///
/// # Examples
/// ```
/// use quick_cook::core::{DishName, RevealState, reveal_at};
///
/// let target = DishName::new("EGUSI").unwrap();
/// let guesses = vec!["EGUSO".to_string()];
///
/// assert_eq!(reveal_at(&target, &guesses, "", 0).state, RevealState::Correct);
/// assert_eq!(reveal_at(&target, &guesses, "", 4).state, RevealState::Blank);
/// ```
#[must_use]
pub fn reveal_at<S: AsRef<str>>(
    target: &DishName,
    guesses: &[S],
    current_input: &str,
    position: usize,
) -> Reveal {
    if position >= target.len() {
        return Reveal::BLANK;
    }

    let expected = target.letter_at(position);
    let locked = guesses
        .iter()
        .filter_map(|guess| guess.as_ref().as_bytes().get(position).copied())
        .find(|letter| letter.eq_ignore_ascii_case(&expected));

    if let Some(letter) = locked {
        return Reveal {
            letter: Some(letter.to_ascii_uppercase()),
            state: RevealState::Correct,
        };
    }

    match current_input.as_bytes().get(position) {
        Some(&letter) => Reveal {
            letter: Some(letter.to_ascii_uppercase()),
            state: RevealState::Typing,
        },
        None => Reveal::BLANK,
    }
}

/// Reveal every position of the target, left to right
#[must_use]
pub fn reveal_row<S: AsRef<str>>(
    target: &DishName,
    guesses: &[S],
    current_input: &str,
) -> Vec<Reveal> {
    (0..target.len())
        .map(|position| reveal_at(target, guesses, current_input, position))
        .collect()
}

/// Letters of `guess` that occur nowhere in `target`
///
/// Containment is whole-word and case-insensitive, not position-specific.
///
/// # Examples
/// ```
/// use quick_cook::core::{DishName, absent_letters};
///
/// let target = DishName::new("EGUSI").unwrap();
/// assert_eq!(absent_letters("EGUSO", &target).to_string(), "O");
/// // I is in the target, just not at position 0
/// assert!(absent_letters("IGUSE", &target).is_empty());
/// ```
#[must_use]
pub fn absent_letters(guess: &str, target: &DishName) -> LetterSet {
    guess
        .bytes()
        .filter(|&letter| !target.has_letter(letter))
        .collect()
}

/// Fold one submitted guess into an accumulated disabled set
///
/// The result is always a superset of `disabled`.
#[must_use]
pub fn disabled_letters(disabled: LetterSet, last_guess: &str, target: &DishName) -> LetterSet {
    disabled.union(absent_letters(last_guess, target))
}
