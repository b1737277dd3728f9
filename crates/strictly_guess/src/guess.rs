//! Parsing raw player input into a range-checked guess.
//!
//! A [`Guess`] can only hold a value inside the guess range, so the session
//! never has to re-check bounds once parsing succeeded.

use super::types::{LOWER_BOUND, Outcome, UPPER_BOUND, guess_range};
use serde::Serialize;
use tracing::instrument;

/// A whole number inside the guess range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Guess(u8);

impl Guess {
    /// Checks that `value` lies in the guess range.
    pub fn new(value: i64) -> Result<Self, GuessError> {
        u8::try_from(value)
            .ok()
            .filter(|v| guess_range().contains(v))
            .map(Self)
            .ok_or(GuessError::OutOfRange(value))
    }

    /// Parses what the player typed.
    ///
    /// Surrounding whitespace is ignored. Integer literals parse directly;
    /// a decimal literal is truncated toward zero (`"4.5"` is 4).
    #[instrument(level = "trace")]
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let trimmed = raw.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(_) => truncated_decimal(trimmed).ok_or(GuessError::InvalidFormat)?,
        };
        Self::new(value)
    }

    /// Returns the guessed number.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Guess> for u8 {
    fn from(guess: Guess) -> Self {
        guess.0
    }
}

/// Whether `raw` would pass format and range validation.
///
/// Drives the live submit affordance. Duplicates are deliberately not
/// considered here; they are only detected on submit.
pub fn is_submittable(raw: &str) -> bool {
    Guess::parse(raw).is_ok()
}

/// Resolves plain decimal literals such as `"7.9"` or `"100."` to their
/// integer part. Exponents and named values are not literals here.
fn truncated_decimal(text: &str) -> Option<i64> {
    let plain = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'));
    if !plain {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Float to int casts truncate and saturate, so huge literals stay out of range.
    Some(value.trunc() as i64)
}

/// Why raw input could not become a [`Guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Not a number.
    #[display("Not a number")]
    InvalidFormat,

    /// A whole number outside the guess range.
    #[display("{} is outside {}..={}", _0, LOWER_BOUND, UPPER_BOUND)]
    OutOfRange(i64),
}

impl std::error::Error for GuessError {}

impl From<GuessError> for Outcome {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::InvalidFormat => Outcome::InvalidFormat,
            GuessError::OutOfRange(_) => Outcome::OutOfRange,
        }
    }
}
