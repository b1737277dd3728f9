//! End-to-end behaviour of a guessing session.

use strictly_guess::{Direction, FixedTarget, GameSession, MAX_ATTEMPTS, Outcome, SessionSnapshot};

fn session(target: u8) -> GameSession<FixedTarget> {
    GameSession::with_source(FixedTarget::new(target))
}

fn hint(direction: Direction) -> Outcome {
    Outcome::Hint { direction }
}

#[test]
fn test_binary_search_round() {
    let mut game = session(50);

    assert_eq!(game.submit_guess("25"), hint(Direction::Low));
    assert_eq!(game.attempts(), 1);

    assert_eq!(game.submit_guess("75"), hint(Direction::High));
    assert_eq!(game.attempts(), 2);

    assert_eq!(game.submit_guess("50"), Outcome::Won { attempts: 3 });
    assert!(!game.is_active());
    assert_eq!(game.history(), &[25, 75, 50]);
}

#[test]
fn test_tenth_wrong_guess_loses() {
    let mut game = session(7);
    for guess in 11..=19 {
        assert!(matches!(game.submit_guess(&guess.to_string()), Outcome::Hint { .. }));
    }
    assert_eq!(game.attempts(), 9);
    assert!(game.is_active());

    assert_eq!(game.submit_guess("20"), Outcome::Lost { target: 7 });
    assert!(!game.is_active());
    assert_eq!(game.attempts(), MAX_ATTEMPTS);
    assert_eq!(game.remaining(), 0);
}

#[test]
fn test_non_numeric_input_is_not_counted() {
    let mut game = session(50);
    assert_eq!(game.submit_guess("abc"), Outcome::InvalidFormat);
    assert_eq!(game.attempts(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn test_repeated_guess_is_duplicate() {
    let mut game = session(50);
    assert!(game.submit_guess("30").is_accepted());
    assert_eq!(game.submit_guess("30"), Outcome::Duplicate);
    assert_eq!(game.attempts(), 1);
}

#[test]
fn test_every_fresh_value_is_recorded_once() {
    for guess in 1..=100u8 {
        let mut game = session(if guess == 50 { 51 } else { 50 });
        let before = game.attempts();
        game.submit_guess(&guess.to_string());
        assert_eq!(game.attempts(), before + 1);
        assert_eq!(game.history().iter().filter(|&&g| g == guess).count(), 1);
    }
}

#[test]
fn test_rejected_input_never_mutates() {
    let mut game = session(50);
    game.submit_guess("10");
    let before: SessionSnapshot = game.snapshot();

    let rejected = [
        "0", "101", "-5", "0.5", "", "  ", "abc", "1e2", "NaN", "99999999999999999999",
    ];
    for raw in rejected {
        let outcome = game.submit_guess(raw);
        assert!(!outcome.is_accepted(), "{raw:?} was accepted as {outcome:?}");
        assert_eq!(game.snapshot(), before);
    }

    assert_eq!(game.submit_guess("10"), Outcome::Duplicate);
    assert_eq!(game.submit_guess("10.9"), Outcome::Duplicate);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_decimal_guess_counts_as_its_integer_part() {
    let mut game = session(50);
    assert!(strictly_guess::is_submittable("4.5"));
    assert_eq!(game.submit_guess("4.5"), hint(Direction::Low));
    assert_eq!(game.history(), &[4]);
    assert_eq!(game.submit_guess("50.7"), Outcome::Won { attempts: 2 });
}

#[test]
fn test_finished_session_is_frozen() {
    let mut game = session(50);
    game.submit_guess("50");
    let frozen = game.snapshot();

    for raw in ["1", "50", "abc", "500"] {
        assert_eq!(game.submit_guess(raw), Outcome::SessionInactive);
    }
    assert_eq!(game.snapshot(), frozen);

    game.reset();
    assert!(game.is_active());
    assert_eq!(game.attempts(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.submit_guess("50"), Outcome::Won { attempts: 1 });
}

#[test]
fn test_seeded_targets_are_in_range_across_resets() {
    let mut game = GameSession::seeded(2024);
    for _ in 0..20 {
        let outcomes: Vec<Outcome> = (1..=MAX_ATTEMPTS)
            .map(|guess| game.submit_guess(&guess.to_string()))
            .take_while(|outcome| !matches!(outcome, Outcome::SessionInactive))
            .collect();
        assert!(outcomes.last().is_some_and(Outcome::is_terminal));
        assert_eq!(outcomes.iter().filter(|o| o.is_terminal()).count(), 1);
        game.reset();
    }
}
