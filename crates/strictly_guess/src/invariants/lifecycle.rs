//! Lifecycle invariants: the target and the active flag.

use super::Invariant;
use crate::session::Round;
use crate::{MAX_ATTEMPTS, guess_range};

/// Invariant: the target lies in the guess range.
pub(crate) struct TargetInRangeInvariant;

impl Invariant<Round> for TargetInRangeInvariant {
    fn holds(round: &Round) -> bool {
        guess_range().contains(&round.target)
    }

    fn description() -> &'static str {
        "Target lies inside the guess range"
    }
}

/// Invariant: a round is finished exactly when it was won or ran out of attempts.
pub(crate) struct FinishedWhenTerminalInvariant;

impl Invariant<Round> for FinishedWhenTerminalInvariant {
    fn holds(round: &Round) -> bool {
        let won = round.history.last() == Some(&round.target);
        let exhausted = round.attempts == MAX_ATTEMPTS;
        round.active != (won || exhausted)
    }

    fn description() -> &'static str {
        "Round is finished iff the target was found or attempts ran out"
    }
}
