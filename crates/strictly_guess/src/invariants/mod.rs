//! First-class invariants for a guessing round.
//!
//! Each invariant is a logical property of [`Round`](crate::session::Round)
//! that must hold after every transition. They are checked in debug builds
//! by the session and can be tested independently.

mod attempts;
mod history;
mod lifecycle;

pub(crate) use attempts::{AttemptsBoundedInvariant, HistoryMatchesAttemptsInvariant};
pub(crate) use history::DistinctInRangeInvariant;
pub(crate) use lifecycle::{FinishedWhenTerminalInvariant, TargetInRangeInvariant};

/// A logical property that must hold for a given state.
pub(crate) trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub(crate) trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Every invariant a round must satisfy.
pub(crate) type RoundInvariants = (
    AttemptsBoundedInvariant,
    HistoryMatchesAttemptsInvariant,
    DistinctInRangeInvariant,
    TargetInRangeInvariant,
    FinishedWhenTerminalInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Round;
    use crate::{FixedTarget, GameSession};

    #[test]
    fn test_invariant_set_holds_for_fresh_round() {
        let session = GameSession::with_source(FixedTarget::new(50));
        assert!(RoundInvariants::check_all(session.round()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_lost_game() {
        let mut session = GameSession::with_source(FixedTarget::new(50));
        for guess in 1..=10 {
            session.submit_guess(&guess.to_string());
            assert!(RoundInvariants::check_all(session.round()).is_ok());
        }
        assert!(!session.is_active());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut round = Round::new(50);
        round.attempts = 11;
        round.history = vec![0, 0];

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        let descriptions: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                AttemptsBoundedInvariant::description(),
                HistoryMatchesAttemptsInvariant::description(),
                DistinctInRangeInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Counting = (AttemptsBoundedInvariant, HistoryMatchesAttemptsInvariant);
        assert!(Counting::check_all(&Round::new(1)).is_ok());
    }
}
