//! Prep and cook countdown timers
//!
//! The timer is driven by explicit one-second ticks so it can be tested
//! without a clock; the `timer` command feeds it from a real interval.

use std::fmt;

/// Which part of the recipe a timer counts down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Prep,
    Cook,
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prep => "Prep",
            Self::Cook => "Cook",
        })
    }
}

/// A pausable countdown measured in whole seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    kind: TimerKind,
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
}

impl CountdownTimer {
    #[must_use]
    pub const fn new(kind: TimerKind, minutes: u32) -> Self {
        let total_seconds = minutes.saturating_mul(60);
        Self {
            kind,
            total_seconds,
            remaining_seconds: total_seconds,
            running: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TimerKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    #[inline]
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Reset is offered once any time has elapsed
    #[inline]
    #[must_use]
    pub const fn can_reset(&self) -> bool {
        self.remaining_seconds < self.total_seconds
    }

    /// Start counting; a finished timer stays stopped
    pub fn start(&mut self) {
        self.running = !self.is_finished();
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start if paused, pause if running
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and restore the full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.total_seconds;
    }

    /// Advance one second; stops itself on reaching zero
    ///
    /// Returns true when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Remaining time as `MM:SS`
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format seconds as zero-padded `MM:SS`; minutes are not wrapped into hours
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
