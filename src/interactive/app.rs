//! TUI application state and logic

use crate::core::DishRecord;
use crate::game::{GameController, GameError, GamePhase, Intent, Outcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;

/// Application state
pub struct App {
    pub controller: GameController,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    Hint,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub levels_won: usize,
    pub games_lost: usize,
}

impl App {
    /// Create the app for a playlist
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPlaylist` if there is nothing to play.
    pub fn new(playlist: impl Into<Arc<[DishRecord]>>) -> Result<Self, GameError> {
        let controller = GameController::new(playlist)?;

        Ok(Self {
            controller,
            messages: vec![
                Message {
                    text: "Welcome! Guess the dish from its letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, '?' for a hint".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        })
    }

    /// Translate a key press into an intent for the current phase
    #[must_use]
    pub fn intent_for(&self, key: KeyEvent) -> Option<Intent> {
        let session = self.controller.session();
        match (session.phase(), key.code) {
            (GamePhase::Playing, KeyCode::Char('?')) => Some(Intent::Hint),
            (GamePhase::Playing, KeyCode::Char(c)) if session.accepts_letter(c) => {
                Some(Intent::KeyTapped(c))
            }
            (GamePhase::Playing, KeyCode::Backspace) => Some(Intent::Delete),
            (GamePhase::Playing, KeyCode::Enter) => Some(Intent::Submit),
            (GamePhase::LevelWon, KeyCode::Char('n' | 'N') | KeyCode::Enter) => {
                Some(Intent::NextLevel)
            }
            (
                GamePhase::GameLost | GamePhase::AllLevelsComplete,
                KeyCode::Char('r' | 'R') | KeyCode::Enter,
            ) => Some(Intent::PlayAgain),
            _ => None,
        }
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Propagates a transition the game rejected.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        let quit = key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            self.should_quit = true;
            return Ok(());
        }

        let Some(intent) = self.intent_for(key) else {
            return Ok(());
        };
        let outcome = self.controller.dispatch(intent)?;
        if intent == Intent::PlayAgain {
            self.messages.clear();
            self.stats.games_played += 1;
            self.add_message("New game! Back to the first dish.", MessageStyle::Info);
        }
        self.record_outcome(&outcome);
        Ok(())
    }

    fn record_outcome(&mut self, outcome: &Outcome) {
        let Some(text) = outcome.message() else {
            return;
        };

        let style = match outcome {
            Outcome::Continue
            | Outcome::InvalidGuess { .. }
            | Outcome::RuledOutLetter { .. }
            | Outcome::WrongGuess { .. } => MessageStyle::Error,
            Outcome::LevelWon | Outcome::AllComplete => {
                self.stats.levels_won += 1;
                MessageStyle::Success
            }
            Outcome::GameOver { .. } => {
                self.stats.games_lost += 1;
                MessageStyle::Error
            }
            Outcome::Hint(_) => MessageStyle::Hint,
        };
        self.add_message(&text, style);

        match outcome {
            Outcome::LevelWon => {
                self.add_message("Press 'n' for the next dish.", MessageStyle::Info);
            }
            Outcome::GameOver { .. } | Outcome::AllComplete => {
                self.add_message("Press 'r' to play again or Esc to quit.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or restore fails, or the game rejects
/// a transition.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(names: &[&str]) -> App {
        let playlist: Vec<DishRecord> = names
            .iter()
            .map(|name| DishRecord::new(name, "img", "A fact").unwrap())
            .collect();
        App::new(playlist).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn letters_type_and_backspace_deletes() {
        let mut app = app(&["FUFU"]);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.session().current_input(), "F");
    }

    #[test]
    fn question_mark_shows_hint() {
        let mut app = app(&["FUFU"]);
        press(&mut app, KeyCode::Char('?'));
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "A fact");
        assert_eq!(last.style, MessageStyle::Hint);
    }

    #[test]
    fn n_advances_only_after_win() {
        let mut app = app(&["FUFU", "EGUSI"]);
        type_word(&mut app, "fufu");
        assert_eq!(app.controller.session().phase(), GamePhase::LevelWon);
        assert_eq!(app.stats.levels_won, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.session().level_index(), 1);

        // While playing, 'n' is just a letter
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.session().current_input(), "N");
    }

    #[test]
    fn r_restarts_after_loss() {
        let mut app = app(&["FUFU"]);
        for guess in ["aaaa", "bbbb", "cccc"] {
            type_word(&mut app, guess);
        }
        assert_eq!(app.controller.session().phase(), GamePhase::GameLost);
        assert_eq!(app.stats.games_lost, 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller.session().phase(), GamePhase::Playing);
        assert_eq!(app.stats.games_played, 2);
    }

    #[test]
    fn disabled_key_sends_nothing() {
        let mut app = app(&["FUFU"]);
        type_word(&mut app, "aaaa");

        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.intent_for(key), None);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.controller.session().current_input(), "F");
    }

    #[test]
    fn letters_ignored_after_game_ends() {
        let mut app = app(&["FUFU"]);
        type_word(&mut app, "fufu");
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.controller.session().current_input(), "");
        assert_eq!(app.controller.session().phase(), GamePhase::AllLevelsComplete);
    }

    #[test]
    fn escape_quits() {
        let mut app = app(&["FUFU"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_without_typing() {
        let mut app = app(&["FUFU"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.controller.session().current_input(), "");
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&["FUFU"]);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('?'));
        }
        assert_eq!(app.messages.len(), 5);
    }
}
