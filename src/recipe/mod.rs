//! Recipe helpers beyond the catalog data

pub mod timer;

pub use timer::{CountdownTimer, TimerKind, format_clock};
