//! History invariant: accepted guesses are distinct and in range.

use super::Invariant;
use crate::guess_range;
use crate::session::Round;
use std::collections::HashSet;

/// Invariant: history holds distinct values from the guess range.
pub(crate) struct DistinctInRangeInvariant;

impl Invariant<Round> for DistinctInRangeInvariant {
    fn holds(round: &Round) -> bool {
        let range = guess_range();
        let mut seen = HashSet::with_capacity(round.history.len());
        round
            .history
            .iter()
            .all(|guess| range.contains(guess) && seen.insert(*guess))
    }

    fn description() -> &'static str {
        "History entries are distinct and inside the guess range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_with(history: Vec<u8>) -> Round {
        let mut round = Round::new(99);
        round.attempts = history.len() as u8;
        round.history = history;
        round
    }

    #[test]
    fn test_distinct_history_holds() {
        assert!(DistinctInRangeInvariant::holds(&round_with(vec![1, 50, 100])));
    }

    #[test]
    fn test_repeated_guess_violates() {
        assert!(!DistinctInRangeInvariant::holds(&round_with(vec![30, 30])));
    }

    #[test]
    fn test_out_of_range_entry_violates() {
        assert!(!DistinctInRangeInvariant::holds(&round_with(vec![0])));
        assert!(!DistinctInRangeInvariant::holds(&round_with(vec![101])));
    }
}
