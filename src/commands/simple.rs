//! Simple interactive CLI mode
//!
//! Line-based guessing game without TUI. Reads guesses from any `BufRead`
//! and writes to any `Write`, so whole games can be scripted in tests.

use crate::game::{GameController, GamePhase, Intent, MAX_ATTEMPTS, Outcome};
use crate::output::formatters::{attempts_indicator, disabled_letters_text, reveal_row_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the simple game until the player quits or input ends
///
/// Each non-empty line is a guess. `:hint` shows the dish fact, `:restart`
/// starts over from the first dish, `:quit` exits.
///
/// # Errors
///
/// Returns an error on I/O failure or if the controller rejects an intent.
pub fn run_simple<R: BufRead, W: Write>(
    controller: &mut GameController,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Quick Cook - Guess the Dish                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Type the dish name and press Enter. You have {MAX_ATTEMPTS} tries per dish."
    )?;
    writeln!(
        out,
        "Commands: ':hint' for a clue, ':restart' to start over, ':quit' to exit\n"
    )?;

    print_board(controller, &mut out)?;

    loop {
        let prompt = match controller.session().phase() {
            GamePhase::Playing => "Guess",
            GamePhase::LevelWon => "Press Enter for the next dish",
            GamePhase::GameLost | GamePhase::AllLevelsComplete => "Play again? (yes/no)",
        };
        let Some(line) = read_line(&mut input, &mut out, prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        if matches!(line.as_str(), ":quit" | ":q" | ":exit") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let intents = match controller.session().phase() {
            GamePhase::Playing => match line.as_str() {
                "" => continue,
                ":hint" | ":h" => vec![Intent::Hint],
                ":restart" | ":r" => vec![Intent::PlayAgain],
                guess => {
                    let outcome = controller.submit_word(guess)?;
                    print_outcome(&outcome, &mut out)?;
                    Vec::new()
                }
            },
            GamePhase::LevelWon => vec![Intent::NextLevel],
            GamePhase::GameLost | GamePhase::AllLevelsComplete => {
                if matches!(line.to_lowercase().as_str(), "yes" | "y") {
                    vec![Intent::PlayAgain]
                } else {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        };

        for intent in intents {
            let outcome = controller.dispatch(intent)?;
            print_outcome(&outcome, &mut out)?;
        }

        if controller.session().phase() == GamePhase::Playing {
            print_board(controller, &mut out)?;
        }
    }
}

fn print_board<W: Write>(controller: &GameController, out: &mut W) -> Result<()> {
    let session = controller.session();
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Dish {} of {}   Attempts: {}",
        session.level_index() + 1,
        session.level_count(),
        attempts_indicator(session.attempts_remaining(), MAX_ATTEMPTS)
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "\n   {}   ({} letters)",
        reveal_row_text(&session.reveal_row()),
        session.target().id.len()
    )?;
    writeln!(
        out,
        "   Not in the dish: {}\n",
        disabled_letters_text(session.disabled_letters())
    )?;
    Ok(())
}

fn print_outcome<W: Write>(outcome: &Outcome, out: &mut W) -> Result<()> {
    let Some(message) = outcome.message() else {
        return Ok(());
    };

    let line = match outcome {
        Outcome::Continue => return Ok(()),
        Outcome::InvalidGuess { .. } | Outcome::RuledOutLetter { .. } => {
            format!("❌ {message}").yellow()
        }
        Outcome::WrongGuess { .. } => format!("✗ {message}").red(),
        Outcome::LevelWon => format!("🎉 {message}").bright_green().bold(),
        Outcome::GameOver { .. } => format!("💀 {message}").red().bold(),
        Outcome::AllComplete => format!("🏆 {message}").bright_yellow().bold(),
        Outcome::Hint(_) => format!("💡 {message}").cyan(),
    };
    writeln!(out, "\n{line}\n")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
