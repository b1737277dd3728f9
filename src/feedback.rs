//! Player-facing messages and guess tags derived from outcomes.

use derive_getters::Getters;
use strictly_guess::{Direction, LOWER_BOUND, Outcome, UPPER_BOUND};
use tracing::instrument;

/// How a feedback line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackKind {
    /// Neutral prompt shown on a fresh round.
    #[default]
    Ready,
    /// Rejected input or a lost round.
    Error,
    /// Directional hint after a wrong guess.
    Hint,
    /// The round was won.
    Success,
}

/// A message for the player and its styling.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Feedback {
    message: String,
    kind: FeedbackKind,
}

impl Feedback {
    /// Creates feedback from parts.
    pub fn new(message: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// The prompt shown at the start of every round.
    pub fn ready() -> Self {
        Self::new("Ready to play? Enter your first guess!", FeedbackKind::Ready)
    }

    /// Maps a submission outcome to what the player reads.
    #[instrument(level = "trace")]
    pub fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::SessionInactive => Self::new(
                "The game is over. Press r to play again.",
                FeedbackKind::Error,
            ),
            Outcome::InvalidFormat => {
                Self::new("Please enter a valid number!", FeedbackKind::Error)
            }
            Outcome::OutOfRange => Self::new(
                format!(
                    "Please enter a number between {} and {}!",
                    LOWER_BOUND, UPPER_BOUND
                ),
                FeedbackKind::Error,
            ),
            Outcome::Duplicate => Self::new(
                "You already guessed that number! Try something else.",
                FeedbackKind::Error,
            ),
            Outcome::Hint {
                direction: Direction::High,
            } => Self::new("Too high! Try a lower number.", FeedbackKind::Hint),
            Outcome::Hint {
                direction: Direction::Low,
            } => Self::new("Too low! Try a higher number.", FeedbackKind::Hint),
            Outcome::Won { attempts } => Self::new(
                format!(
                    "🎉 Congratulations! You found the number in {} {}!",
                    attempts,
                    if *attempts == 1 { "attempt" } else { "attempts" }
                ),
                FeedbackKind::Success,
            ),
            Outcome::Lost { target } => Self::new(
                format!("😔 Game Over! The number was {}. Better luck next time!", target),
                FeedbackKind::Error,
            ),
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::ready()
    }
}

/// Relation of an accepted guess to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GuessTag {
    /// Above the target.
    High,
    /// Below the target.
    Low,
    /// The target itself; only ever the last entry.
    Correct,
}

impl GuessTag {
    /// Tags `guess` using the outcome its submission produced.
    ///
    /// Returns `None` for rejected submissions, which were never recorded.
    pub fn for_outcome(guess: u8, outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Hint {
                direction: Direction::High,
            } => Some(Self::High),
            Outcome::Hint {
                direction: Direction::Low,
            } => Some(Self::Low),
            Outcome::Won { .. } => Some(Self::Correct),
            Outcome::Lost { target } if guess > *target => Some(Self::High),
            Outcome::Lost { .. } => Some(Self::Low),
            _ => None,
        }
    }
}

/// An accepted guess with its tag, as shown in the guess list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TaggedGuess {
    value: u8,
    tag: GuessTag,
}

impl TaggedGuess {
    /// Creates a tagged guess.
    pub fn new(value: u8, tag: GuessTag) -> Self {
        Self { value, tag }
    }
}
