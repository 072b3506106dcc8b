//! Quick Cook
//!
//! A recipe catalog with a guess-the-dish word game. The game engine is a
//! pure state machine: every transition returns a new session.
//!
//! # Quick Start
//!
//! ```rust
//! use quick_cook::core::DishRecord;
//! use quick_cook::game::{GameController, Intent, Outcome};
//!
//! let playlist = vec![DishRecord::new("EGUSI", "Egusi-Soup", "Made with melon seeds").unwrap()];
//! let mut game = GameController::new(playlist).unwrap();
//!
//! game.type_word("egusi");
//! let outcome = game.dispatch(Intent::Submit).unwrap();
//! assert_eq!(outcome, Outcome::AllComplete);
//! ```

// Core domain types
pub mod core;

// Game session and controller
pub mod game;

// Recipe catalog and game playlist
pub mod catalog;

// Persisted favorites
pub mod favorites;

// Cooking timers
pub mod recipe;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
