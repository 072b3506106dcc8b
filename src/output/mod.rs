//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_cuisines, print_meal_detail, print_meal_list, print_replay_result};
