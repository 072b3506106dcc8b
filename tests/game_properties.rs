//! Property tests for the guessing game's session invariants

use proptest::prelude::*;
use quick_cook::core::{DishRecord, LetterSet, absent_letters};
use quick_cook::game::{GamePhase, GameSession, MAX_ATTEMPTS};

fn session_for(targets: &[String]) -> GameSession {
    let playlist: Vec<DishRecord> = targets
        .iter()
        .map(|name| DishRecord::new(name, "img", "fact").unwrap())
        .collect();
    GameSession::new(playlist).unwrap()
}

fn typed(session: &GameSession, word: &str) -> GameSession {
    word.chars()
        .fold(session.clone(), |next, letter| next.type_letter(letter))
}

/// Type and submit `word`, ignoring short submissions
fn play(session: &GameSession, word: &str) -> GameSession {
    let with_input = typed(session, word);
    with_input.submit().unwrap_or(with_input)
}

fn correct_positions(session: &GameSession) -> Vec<usize> {
    session
        .reveal_row()
        .iter()
        .enumerate()
        .filter(|(_, reveal)| reveal.is_correct())
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn prop_correct_letters_stay_revealed(
        target in "[A-F]{1,6}",
        guesses in prop::collection::vec("[A-F]{1,6}", 1..6),
    ) {
        let mut session = session_for(&[target]);
        for guess in &guesses {
            if session.phase() != GamePhase::Playing {
                break;
            }
            let before = correct_positions(&session);
            session = play(&session, guess);
            let after = correct_positions(&session);
            prop_assert!(before.iter().all(|position| after.contains(position)));
        }
    }

    #[test]
    fn prop_disabled_is_union_of_absent_letters(
        target in "[A-H]{1,6}",
        guesses in prop::collection::vec("[A-H]{1,6}", 1..6),
    ) {
        let mut session = session_for(&[target.clone()]);
        let target_letters: LetterSet = target.bytes().collect();

        for guess in &guesses {
            if session.phase() != GamePhase::Playing {
                break;
            }
            let before = session.disabled_letters();
            session = play(&session, guess);
            let after = session.disabled_letters();

            prop_assert!(before.is_subset(after));
            prop_assert!(after.iter().all(|letter| !target_letters.contains(letter)));
        }

        let expected = session
            .guesses()
            .iter()
            .fold(LetterSet::EMPTY, |acc, guess| {
                acc.union(absent_letters(guess, &session.target().id))
            });
        prop_assert_eq!(session.disabled_letters(), expected);
    }

    #[test]
    fn prop_attempts_drop_by_one_per_miss(
        target in "[A-D]{2,5}",
        guesses in prop::collection::vec("[A-D]{2,5}", 1..8),
    ) {
        let mut session = session_for(&[target]);
        for guess in &guesses {
            if session.phase() != GamePhase::Playing {
                break;
            }
            let with_input = typed(&session, guess);
            let Ok(next) = with_input.submit() else {
                prop_assert_eq!(with_input.attempts_remaining(), session.attempts_remaining());
                session = with_input;
                continue;
            };

            if next.has_won() {
                prop_assert_eq!(next.attempts_remaining(), session.attempts_remaining());
            } else {
                prop_assert_eq!(next.attempts_remaining(), session.attempts_remaining() - 1);
                prop_assert_eq!(
                    next.phase() == GamePhase::GameLost,
                    next.attempts_remaining() == 0
                );
            }
            session = next;
        }
    }

    #[test]
    fn prop_only_last_level_completes(
        targets in prop::collection::vec("[A-Z]{1,8}", 1..5),
    ) {
        let mut session = session_for(&targets);
        for (i, target) in targets.iter().enumerate() {
            session = play(&session, target);
            if i + 1 == targets.len() {
                prop_assert_eq!(session.phase(), GamePhase::AllLevelsComplete);
                prop_assert!(session.is_completed());
            } else {
                prop_assert_eq!(session.phase(), GamePhase::LevelWon);
                prop_assert!(!session.is_completed());
                session = session.advance_level().unwrap();
            }
        }
    }

    #[test]
    fn prop_restart_resets_everything(
        targets in prop::collection::vec("[A-E]{1,5}", 1..4),
        guesses in prop::collection::vec("[A-E]{1,5}", 0..5),
    ) {
        let mut session = session_for(&targets);
        for guess in &guesses {
            session = play(&session, guess);
            if session.phase() == GamePhase::LevelWon {
                session = session.advance_level().unwrap();
            }
        }
        let session = typed(&session, "AB").restart();

        prop_assert_eq!(session.level_index(), 0);
        prop_assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        prop_assert!(session.guesses().is_empty());
        prop_assert!(session.current_input().is_empty());
        prop_assert!(session.disabled_letters().is_empty());
        prop_assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn prop_disabled_letters_are_never_typed(
        target in "[A-F]{2,5}",
        guesses in prop::collection::vec("[A-F]{2,5}", 1..4),
        input in "[A-Fa-f]{0,8}",
    ) {
        let mut session = session_for(&[target]);
        for guess in &guesses {
            session = play(&session, guess);
        }
        let disabled = session.disabled_letters();
        let after = typed(&session, &input);

        prop_assert!(after.current_input().bytes().all(|letter| !disabled.contains(letter)));
    }

    #[test]
    fn prop_typing_past_length_is_noop(
        target in "[A-Z]{1,8}",
        input in "[a-zA-Z]{0,16}",
    ) {
        let session = typed(&session_for(&[target.clone()]), &input);
        prop_assert_eq!(session.current_input().len(), input.len().min(target.len()));
        prop_assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        prop_assert!(session.guesses().is_empty());
    }
}
