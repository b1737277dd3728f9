//! Counting invariants: the attempt budget and its relation to history.

use super::Invariant;
use crate::session::Round;
use crate::MAX_ATTEMPTS;

/// Invariant: attempts never exceed the budget.
pub(crate) struct AttemptsBoundedInvariant;

impl Invariant<Round> for AttemptsBoundedInvariant {
    fn holds(round: &Round) -> bool {
        round.attempts <= MAX_ATTEMPTS
    }

    fn description() -> &'static str {
        "Attempts stay within the attempt budget"
    }
}

/// Invariant: every attempt corresponds to exactly one history entry.
pub(crate) struct HistoryMatchesAttemptsInvariant;

impl Invariant<Round> for HistoryMatchesAttemptsInvariant {
    fn holds(round: &Round) -> bool {
        round.history.len() == usize::from(round.attempts)
    }

    fn description() -> &'static str {
        "History length equals attempts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_holds() {
        let round = Round::new(10);
        assert!(AttemptsBoundedInvariant::holds(&round));
        assert!(HistoryMatchesAttemptsInvariant::holds(&round));
    }

    #[test]
    fn test_over_budget_violates() {
        let mut round = Round::new(10);
        round.attempts = MAX_ATTEMPTS + 1;
        assert!(!AttemptsBoundedInvariant::holds(&round));
    }

    #[test]
    fn test_missing_history_entry_violates() {
        let mut round = Round::new(10);
        round.attempts = 2;
        round.history = vec![4];
        assert!(!HistoryMatchesAttemptsInvariant::holds(&round));
    }
}
