//! Strictly Guess - number-guessing game logic.
//!
//! A [`GameSession`] hides a target in `1..=100` and answers each guess with
//! a typed [`Outcome`] until the player finds it or spends ten attempts.
//! Rendering is left entirely to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_guess::{Direction, FixedTarget, GameSession, Outcome};
//!
//! let mut session = GameSession::with_source(FixedTarget::new(50));
//! assert_eq!(
//!     session.submit_guess("25"),
//!     Outcome::Hint { direction: Direction::Low }
//! );
//! assert_eq!(session.submit_guess("25"), Outcome::Duplicate);
//! assert_eq!(session.submit_guess("50"), Outcome::Won { attempts: 2 });
//! assert!(!session.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod guess;
mod invariants;
mod session;
mod shared;
mod target;
mod types;

pub use guess::{Guess, GuessError, is_submittable};
pub use session::GameSession;
pub use shared::SharedSession;
pub use target::{FixedTarget, ScriptedTargets, TargetSource};
pub use types::{
    Direction, LOWER_BOUND, MAX_ATTEMPTS, Outcome, SessionSnapshot, UPPER_BOUND, guess_range,
};
