//! Contract-based validation for guesses.
//!
//! Preconditions decide whether a parsed guess may be recorded; the
//! postcondition checks that recording it kept every round invariant.
//! A failed precondition is a rejection [`Outcome`], never an error.

use super::guess::Guess;
use super::invariants::{InvariantSet, RoundInvariants};
use super::session::Round;
use super::types::Outcome;
use tracing::{instrument, warn};

/// Precondition: the round still takes guesses.
pub(crate) struct SessionIsActive;

impl SessionIsActive {
    #[instrument(level = "trace", skip(round))]
    pub fn check(round: &Round) -> Result<(), Outcome> {
        if round.active {
            Ok(())
        } else {
            Err(Outcome::SessionInactive)
        }
    }
}

/// Precondition: the value has not been accepted before this round.
pub(crate) struct NotYetGuessed;

impl NotYetGuessed {
    #[instrument(level = "trace", skip(round))]
    pub fn check(guess: Guess, round: &Round) -> Result<(), Outcome> {
        if round.history.contains(&guess.value()) {
            Err(Outcome::Duplicate)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for recording a parsed guess.
pub(crate) struct AcceptableGuess;

impl AcceptableGuess {
    /// Validates all preconditions, first failure wins.
    #[instrument(level = "trace", skip(round))]
    pub fn check(guess: Guess, round: &Round) -> Result<(), Outcome> {
        SessionIsActive::check(round)?;
        NotYetGuessed::check(guess, round)?;
        Ok(())
    }
}

/// Postcondition for an accepted guess.
pub(crate) struct AcceptContract;

impl AcceptContract {
    /// Verifies that exactly one guess was appended and every invariant holds.
    pub fn post(before: &Round, after: &Round) -> Result<(), String> {
        let mut failures = Vec::new();

        if after.attempts != before.attempts + 1 {
            failures.push("attempts advance by exactly one".to_string());
        }
        if after.history.len() != before.history.len() + 1
            || !after.history.starts_with(&before.history)
        {
            failures.push("history grows by exactly one trailing entry".to_string());
        }
        if after.target != before.target {
            failures.push("target is unchanged within a round".to_string());
        }
        if let Err(violations) = RoundInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Accept postcondition failed");
            Err(format!("Postcondition failed: {}", failures.join("; ")))
        }
    }
}
