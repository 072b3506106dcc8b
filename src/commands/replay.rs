//! Scripted game replay
//!
//! Plays a fixed list of guesses against the playlist and records what the
//! player would have seen after each one.

use crate::core::{DishRecord, LetterSet, Reveal};
use crate::game::{GameController, GameError, GamePhase, Intent, Outcome};

/// Guesses to play, in order
pub struct ReplayConfig {
    pub guesses: Vec<String>,
    /// Move on automatically after a level is won
    pub auto_advance: bool,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(guesses: Vec<String>) -> Self {
        Self {
            guesses,
            auto_advance: true,
        }
    }
}

/// Result of a replay
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub final_phase: GamePhase,
    pub level_index: usize,
    pub level_count: usize,
    /// Guesses not played because the game ended first
    pub unplayed: usize,
}

impl ReplayResult {
    #[must_use]
    pub fn levels_won(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Outcome::LevelWon | Outcome::AllComplete))
            .count()
    }
}

/// A single submitted guess
pub struct ReplayStep {
    pub guess: String,
    pub level_index: usize,
    pub reveals: Vec<Reveal>,
    pub disabled: LetterSet,
    pub outcome: Outcome,
}

/// Replay `config.guesses` against `playlist`
///
/// Each guess is played whole from an empty input. Non-letters are dropped,
/// and a guess of the wrong length or with a ruled-out letter is recorded
/// without costing an attempt. Play stops at the first loss or when every
/// level is complete.
///
/// # Errors
///
/// Returns `GameError::EmptyPlaylist` if there is nothing to play.
pub fn replay(config: ReplayConfig, playlist: Vec<DishRecord>) -> Result<ReplayResult, GameError> {
    let mut controller = GameController::new(playlist)?;
    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut played = 0;

    for guess in &config.guesses {
        if controller.session().phase() == GamePhase::LevelWon && config.auto_advance {
            controller.dispatch(Intent::NextLevel)?;
        }
        if controller.session().phase() != GamePhase::Playing {
            break;
        }

        let level_index = controller.session().level_index();
        let outcome = controller.submit_word(guess)?;
        played += 1;

        let session = controller.session();
        steps.push(ReplayStep {
            guess: guess.clone(),
            level_index,
            reveals: session.reveal_row(),
            disabled: session.disabled_letters(),
            outcome,
        });
    }

    let session = controller.session();
    Ok(ReplayResult {
        steps,
        final_phase: session.phase(),
        level_index: session.level_index(),
        level_count: session.level_count(),
        unplayed: config.guesses.len() - played,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatters::reveal_row_text;

    fn playlist(names: &[&str]) -> Vec<DishRecord> {
        names
            .iter()
            .map(|name| DishRecord::new(name, "img", "fact").unwrap())
            .collect()
    }

    fn guesses(words: &[&str]) -> ReplayConfig {
        ReplayConfig::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn replay_wins_and_advances() {
        let result = replay(guesses(&["egusi", "fufu"]), playlist(&["EGUSI", "FUFU"])).unwrap();

        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].outcome, Outcome::LevelWon);
        assert_eq!(result.steps[1].level_index, 1);
        assert_eq!(result.steps[1].outcome, Outcome::AllComplete);
        assert_eq!(result.final_phase, GamePhase::AllLevelsComplete);
        assert_eq!(result.levels_won(), 2);
    }

    #[test]
    fn replay_records_reveals_and_disabled() {
        let result = replay(guesses(&["EGXYZ"]), playlist(&["EGUSI"])).unwrap();
        let step = &result.steps[0];

        assert_eq!(reveal_row_text(&step.reveals), "E G _ _ _");
        assert_eq!(step.disabled.to_string(), "XYZ");
        assert_eq!(
            step.outcome,
            Outcome::WrongGuess {
                attempts_remaining: 2
            }
        );
    }

    #[test]
    fn replay_stops_after_loss() {
        let result = replay(
            guesses(&["AAAA", "BBBB", "CCCC", "FUFU"]),
            playlist(&["FUFU"]),
        )
        .unwrap();

        assert_eq!(result.steps.len(), 3);
        assert_eq!(
            result.steps[2].outcome,
            Outcome::GameOver {
                answer: "FUFU".to_string()
            }
        );
        assert_eq!(result.final_phase, GamePhase::GameLost);
        assert_eq!(result.unplayed, 1);
    }

    #[test]
    fn short_guess_does_not_leak_into_next() {
        let result = replay(guesses(&["FU", "FUFU"]), playlist(&["FUFU"])).unwrap();

        assert_eq!(result.steps[0].outcome, Outcome::InvalidGuess { expected_len: 4 });
        assert_eq!(result.steps[1].outcome, Outcome::AllComplete);
    }

    #[test]
    fn long_guess_is_not_truncated() {
        let result = replay(guesses(&["egusixyz", "egusi"]), playlist(&["EGUSI"])).unwrap();

        assert_eq!(result.steps[0].outcome, Outcome::InvalidGuess { expected_len: 5 });
        assert_eq!(reveal_row_text(&result.steps[0].reveals), "_ _ _ _ _");
        assert_eq!(result.steps[1].outcome, Outcome::AllComplete);
        assert_eq!(result.levels_won(), 1);
    }

    #[test]
    fn ruled_out_letter_costs_nothing() {
        let result = replay(guesses(&["AAAA", "FUFA", "FUFU"]), playlist(&["FUFU"])).unwrap();

        assert_eq!(result.steps[1].outcome, Outcome::RuledOutLetter { letter: 'A' });
        assert_eq!(result.steps[2].outcome, Outcome::AllComplete);
    }

    #[test]
    fn without_auto_advance_stops_at_level_won() {
        let mut config = guesses(&["EGUSI", "FUFU"]);
        config.auto_advance = false;
        let result = replay(config, playlist(&["EGUSI", "FUFU"])).unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.final_phase, GamePhase::LevelWon);
    }

    #[test]
    fn empty_playlist_is_an_error() {
        assert!(matches!(
            replay(guesses(&["X"]), Vec::new()),
            Err(GameError::EmptyPlaylist)
        ));
    }
}
