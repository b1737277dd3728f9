//! Core domain types for the number-guessing game.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Smallest value a target or guess may take.
pub const LOWER_BOUND: u8 = 1;

/// Largest value a target or guess may take.
pub const UPPER_BOUND: u8 = 100;

/// Number of accepted guesses a session allows.
pub const MAX_ATTEMPTS: u8 = 10;

/// The inclusive range targets are drawn from and guesses must fall in.
pub fn guess_range() -> RangeInclusive<u8> {
    LOWER_BOUND..=UPPER_BOUND
}

/// Which side of the target a wrong guess landed on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// The guess was above the target.
    High,
    /// The guess was below the target.
    Low,
}

/// Result of a single submission.
///
/// Rejections are ordinary values: nothing a player types can make
/// [`GameSession::submit_guess`](crate::GameSession::submit_guess) fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The session already finished; nothing was recorded.
    SessionInactive,
    /// The input was not a whole number.
    InvalidFormat,
    /// The number fell outside the guess range.
    OutOfRange,
    /// The number was already guessed this session.
    Duplicate,
    /// Accepted, wrong, with attempts left.
    Hint {
        /// Where the guess sits relative to the target.
        direction: Direction,
    },
    /// Accepted and correct.
    Won {
        /// Accepted guesses it took, including the winning one.
        attempts: u8,
    },
    /// Accepted, wrong, and the last attempt.
    Lost {
        /// The target, disclosed only here.
        target: u8,
    },
}

impl Outcome {
    /// Whether the submission was recorded and consumed an attempt.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Outcome::Hint { .. } | Outcome::Won { .. } | Outcome::Lost { .. }
        )
    }

    /// Whether the submission finished the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won { .. } | Outcome::Lost { .. })
    }
}

/// Owned, read-only view of a session for presentation layers.
///
/// Never carries the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Accepted guesses so far.
    pub attempts: u8,
    /// Accepted guesses still allowed.
    pub remaining: u8,
    /// Attempt budget of the session.
    pub max_attempts: u8,
    /// Whether guesses are still being taken.
    pub active: bool,
    /// Accepted guesses in submission order.
    pub history: Vec<u8>,
}

impl SessionSnapshot {
    /// The most recently accepted guess, if any.
    pub fn last_guess(&self) -> Option<u8> {
        self.history.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_guess_range_matches_bounds() {
        let range = guess_range();
        assert_eq!(*range.start(), 1);
        assert_eq!(*range.end(), 100);
        assert_eq!(range.count(), 100);
    }

    #[test]
    fn test_direction_displays_lowercase() {
        let labels: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, vec!["high", "low"]);
    }

    #[test]
    fn test_accepted_and_terminal_classification() {
        let hint = Outcome::Hint {
            direction: Direction::Low,
        };
        assert!(hint.is_accepted());
        assert!(!hint.is_terminal());

        assert!(Outcome::Won { attempts: 3 }.is_terminal());
        assert!(Outcome::Lost { target: 7 }.is_accepted());

        for rejected in [
            Outcome::SessionInactive,
            Outcome::InvalidFormat,
            Outcome::OutOfRange,
            Outcome::Duplicate,
        ] {
            assert!(!rejected.is_accepted());
            assert!(!rejected.is_terminal());
        }
    }

    #[test]
    fn test_outcome_wire_shape() {
        let json = serde_json::to_value(Outcome::Hint {
            direction: Direction::High,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"kind": "hint", "direction": "high"}));

        let json = serde_json::to_value(Outcome::OutOfRange).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "out_of_range"}));
    }
}
