//! Command implementations

pub mod browse;
pub mod replay;
pub mod simple;
pub mod timer;

pub use browse::{list_meals, search_meals, show_meal, toggle_favorite};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay};
pub use simple::run_simple;
pub use timer::{meal_timer, run_countdown};
