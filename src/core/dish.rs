//! Dish names and game records
//!
//! A `DishName` is the guess target of one level: an uppercase run of A-Z letters.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// A validated dish name usable as a guess target
///
/// Stored uppercase; comparisons against guesses are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DishName {
    text: String,
    letters: LetterSet,
}

/// Error type for names that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DishError {
    #[error("Dish name must not be empty")]
    Empty,
    #[error("Dish name must contain only ASCII letters, found '{0}'")]
    NonAscii(char),
    #[error("Dish name contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl DishName {
    /// Create a dish name from letters only
    ///
    /// # Errors
    /// Returns `DishError` if the name is empty or contains anything but A-Z / a-z.
    ///
    /// # Examples
    /// ```
    /// use quick_cook::core::DishName;
    ///
    /// let name = DishName::new("egusi").unwrap();
    /// assert_eq!(name.text(), "EGUSI");
    ///
    /// assert!(DishName::new("").is_err());
    /// assert!(DishName::new("fu fu").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, DishError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(DishError::Empty);
        }

        if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
            return Err(DishError::NonAscii(ch));
        }

        if let Some(ch) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(DishError::InvalidCharacter(ch));
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Create a dish name from a catalog display name
    ///
    /// Spaces, hyphens and apostrophes are dropped before validation, so
    /// `"Jollof Rice"` becomes `JOLLOFRICE`. Accented letters are rejected.
    ///
    /// # Errors
    /// Returns `DishError` if nothing playable remains.
    pub fn from_display(name: &str) -> Result<Self, DishError> {
        let compact: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '\'' | '\u{2019}'))
            .collect();
        Self::new(compact)
    }

    /// Get the name as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the name as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters (and so the number of positions in a level)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated name
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the name contains a letter anywhere (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Case-insensitive whole-word comparison
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text.eq_ignore_ascii_case(guess)
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A dish as seen by the guessing game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishRecord {
    pub id: DishName,
    pub image: String,
    pub fact: String,
}

impl DishRecord {
    /// Build a record, validating the name
    ///
    /// # Errors
    /// Returns `DishError` if `name` is not a playable dish name.
    pub fn new(
        name: &str,
        image: impl Into<String>,
        fact: impl Into<String>,
    ) -> Result<Self, DishError> {
        Ok(Self {
            id: DishName::from_display(name)?,
            image: image.into(),
            fact: fact.into(),
        })
    }
}
