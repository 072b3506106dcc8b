//! Live prep/cook countdown for one meal

use crate::catalog::Meal;
use crate::recipe::{CountdownTimer, TimerKind};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Timer for the meal's prep or cook time
///
/// # Errors
///
/// Fails if the meal has no time recorded for `kind`.
pub fn meal_timer(meal: &Meal, kind: TimerKind) -> Result<CountdownTimer> {
    let minutes = match kind {
        TimerKind::Prep => meal.prep_time,
        TimerKind::Cook => meal.cook_time,
    };
    if minutes == 0 {
        bail!("{} has no {} time", meal.name, kind.to_string().to_lowercase());
    }
    Ok(CountdownTimer::new(kind, minutes))
}

/// Count `timer` down in real time, redrawing a progress bar every second
///
/// # Errors
///
/// Fails if the progress bar template is invalid.
pub fn run_countdown(meal_name: &str, mut timer: CountdownTimer) -> Result<()> {
    let pb = ProgressBar::new(u64::from(timer.total_seconds()));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:.bold} [{bar:40.green/blue}] {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_prefix(format!("{} {}", timer.kind(), meal_name));
    pb.set_message(timer.display());

    timer.start();
    debug!(meal = meal_name, seconds = timer.total_seconds(), "timer started");

    while timer.is_running() {
        thread::sleep(Duration::from_secs(1));
        timer.tick();
        pb.set_position(u64::from(timer.total_seconds() - timer.remaining_seconds()));
        pb.set_message(timer.display());
    }

    pb.finish_with_message(format!("{} done!", timer.kind()));
    Ok(())
}
