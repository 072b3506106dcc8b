//! Core domain types for the guess-the-dish game
//!
//! Pure and testable: dish names, letter sets and guess evaluation.

mod dish;
mod letters;
mod reveal;

pub use dish::{DishError, DishName, DishRecord};
pub use letters::LetterSet;
pub use reveal::{
    Reveal, RevealState, absent_letters, disabled_letters, reveal_at, reveal_row,
};
