//! End-to-end game scenarios through the controller and replay command

use quick_cook::catalog::loader::default_playlist;
use quick_cook::commands::{ReplayConfig, replay};
use quick_cook::core::{DishRecord, RevealState};
use quick_cook::game::{GameController, GameError, GamePhase, Intent, Outcome};

fn controller(names: &[&str]) -> GameController {
    let playlist: Vec<DishRecord> = names
        .iter()
        .map(|name| DishRecord::new(name, "img", format!("About {name}")).unwrap())
        .collect();
    GameController::new(playlist).unwrap()
}

fn submit(game: &mut GameController, word: &str) -> Outcome {
    game.type_word(word);
    game.dispatch(Intent::Submit).unwrap()
}

fn revealed(game: &GameController) -> String {
    game.session()
        .reveal_row()
        .iter()
        .map(|reveal| reveal.display_char())
        .collect()
}

#[test]
fn egusi_near_miss_then_win() {
    let mut game = controller(&["EGUSI", "FUFU"]);

    let outcome = submit(&mut game, "EGUSO");
    assert_eq!(
        outcome,
        Outcome::WrongGuess {
            attempts_remaining: 2
        }
    );
    assert_eq!(revealed(&game), "EGUS_");
    assert!(game.session().disabled_letters().contains(b'O'));
    assert_eq!(game.session().disabled_letters().len(), 1);
    assert_eq!(game.session().phase(), GamePhase::Playing);

    assert_eq!(submit(&mut game, "EGUSI"), Outcome::LevelWon);
    assert!(!game.session().is_completed());
}

#[test]
fn egusi_on_last_level_completes() {
    let mut game = controller(&["EGUSI"]);
    submit(&mut game, "EGUSO");
    assert_eq!(submit(&mut game, "egusi"), Outcome::AllComplete);
    assert!(game.session().is_completed());
}

#[test]
fn fufu_three_misses_loses() {
    let mut game = controller(&["FUFU"]);
    submit(&mut game, "AAAA");
    submit(&mut game, "BBBB");
    let outcome = submit(&mut game, "CCCC");

    assert_eq!(
        outcome,
        Outcome::GameOver {
            answer: "FUFU".to_string()
        }
    );
    assert_eq!(outcome.message().unwrap(), "The word was 'FUFU'. Try again!");
    assert_eq!(game.session().attempts_remaining(), 0);
    assert_eq!(game.session().phase(), GamePhase::GameLost);
    assert!(
        game.session()
            .reveal_row()
            .iter()
            .all(|reveal| reveal.state == RevealState::Blank)
    );
}

#[test]
fn next_level_while_playing_is_rejected() {
    let mut game = controller(&["FUFU", "EGUSI"]);
    let err = game.dispatch(Intent::NextLevel).unwrap_err();

    assert!(matches!(err, GameError::InvalidTransition { .. }));
    assert!(!err.is_recoverable());
    assert_eq!(game.session().level_index(), 0);
}

#[test]
fn play_again_after_loss_starts_over() {
    let mut game = controller(&["EGUSI", "FUFU"]);
    submit(&mut game, "EGUSI");
    game.dispatch(Intent::NextLevel).unwrap();
    for word in ["AAAA", "BBBB", "CCCC"] {
        submit(&mut game, word);
    }

    game.dispatch(Intent::PlayAgain).unwrap();
    assert_eq!(game.session().level_index(), 0);
    assert_eq!(game.session().phase(), GamePhase::Playing);
    assert!(game.session().disabled_letters().is_empty());
}

#[test]
fn hint_returns_fact_without_changing_session() {
    let mut game = controller(&["FUFU"]);
    game.type_word("FU");
    let before = game.session().clone();

    assert_eq!(
        game.dispatch(Intent::Hint).unwrap(),
        Outcome::Hint("About FUFU".to_string())
    );
    assert_eq!(game.session().current_input(), before.current_input());
    assert_eq!(game.session().attempts_remaining(), before.attempts_remaining());
}

#[test]
fn shipped_playlist_replays_to_completion() {
    let playlist = default_playlist();
    let guesses: Vec<String> = playlist
        .iter()
        .map(|record| record.id.text().to_lowercase())
        .collect();
    let levels = playlist.len();

    let result = replay(ReplayConfig::new(guesses), playlist).unwrap();
    assert_eq!(result.final_phase, GamePhase::AllLevelsComplete);
    assert_eq!(result.levels_won(), levels);
    assert_eq!(result.unplayed, 0);
}

#[test]
fn shipped_playlist_accepts_spaced_names() {
    let result = replay(
        ReplayConfig::new(vec!["Jollof Rice".to_string()]),
        default_playlist(),
    )
    .unwrap();
    assert_eq!(result.steps[0].outcome, Outcome::LevelWon);
}
