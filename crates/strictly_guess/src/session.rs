//! The guessing session state machine.
//!
//! A session is either **Active** (taking guesses) or **Finished** (won or
//! lost). Finished is left only through [`GameSession::reset`], which swaps
//! in a whole new [`Round`] rather than patching fields.

use super::contracts::{AcceptContract, AcceptableGuess, SessionIsActive};
use super::guess::Guess;
use super::target::TargetSource;
use super::types::{Direction, MAX_ATTEMPTS, Outcome, SessionSnapshot, guess_range};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, trace, warn};

/// State of a single round, replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Round {
    pub(crate) target: u8,
    pub(crate) attempts: u8,
    pub(crate) history: Vec<u8>,
    pub(crate) active: bool,
}

impl Round {
    pub(crate) fn new(target: u8) -> Self {
        Self {
            target,
            attempts: 0,
            history: Vec::with_capacity(usize::from(MAX_ATTEMPTS)),
            active: true,
        }
    }

    /// Records a guess that already passed every precondition.
    pub(crate) fn accept(&mut self, guess: Guess) -> Outcome {
        let value = guess.value();
        self.history.push(value);
        self.attempts += 1;

        if value == self.target {
            self.active = false;
            Outcome::Won {
                attempts: self.attempts,
            }
        } else if self.attempts >= MAX_ATTEMPTS {
            self.active = false;
            Outcome::Lost {
                target: self.target,
            }
        } else if value > self.target {
            Outcome::Hint {
                direction: Direction::High,
            }
        } else {
            Outcome::Hint {
                direction: Direction::Low,
            }
        }
    }
}

/// A single-player guessing session.
///
/// Owns its target source, so every reset draws from the same injected
/// randomness. The target is never readable; it leaves the session only as a
/// hint direction or in [`Outcome::Lost`].
pub struct GameSession<S = StdRng> {
    source: S,
    round: Round,
}

impl GameSession<StdRng> {
    /// Creates a session seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_source(StdRng::from_entropy())
    }

    /// Creates a session whose targets are reproducible from `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TargetSource> GameSession<S> {
    /// Creates a session drawing targets from `source`.
    #[instrument(skip(source))]
    pub fn with_source(mut source: S) -> Self {
        let round = Round::new(draw(&mut source));
        info!(max_attempts = MAX_ATTEMPTS, "Guessing session created");
        Self { source, round }
    }

    /// Submits raw player input.
    ///
    /// Validation runs in order and stops at the first failure: inactive
    /// session, unparsable input, out of range, duplicate. Only a guess that
    /// passes all four is recorded.
    #[instrument(skip(self), fields(attempts = self.round.attempts))]
    pub fn submit_guess(&mut self, raw: &str) -> Outcome {
        if let Err(rejection) = SessionIsActive::check(&self.round) {
            debug!("Guess submitted to finished session");
            return rejection;
        }
        match Guess::parse(raw) {
            Ok(guess) => self.submit(guess),
            Err(err) => {
                debug!(error = %err, "Guess rejected");
                err.into()
            }
        }
    }

    /// Submits an already-parsed guess.
    #[instrument(skip(self), fields(attempts = self.round.attempts))]
    pub fn submit(&mut self, guess: Guess) -> Outcome {
        if let Err(rejection) = AcceptableGuess::check(guess, &self.round) {
            debug!(?rejection, "Guess rejected");
            return rejection;
        }

        // Postconditions are only checked in debug builds.
        let before = cfg!(debug_assertions).then(|| self.round.clone());

        let outcome = self.round.accept(guess);

        if let Some(before) = before
            && let Err(failure) = AcceptContract::post(&before, &self.round)
        {
            panic!("{failure}");
        }

        match outcome {
            Outcome::Won { attempts } => info!(attempts, "Target found"),
            Outcome::Lost { .. } => info!(attempts = self.round.attempts, "Attempts exhausted"),
            _ => debug!(?outcome, remaining = self.remaining(), "Guess accepted"),
        }
        outcome
    }

    /// Starts a fresh round with a newly drawn target.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.round = Round::new(draw(&mut self.source));
        info!("Session reset");
    }

    /// Accepted guesses still allowed.
    pub fn remaining(&self) -> u8 {
        MAX_ATTEMPTS - self.round.attempts
    }

    /// Accepted guesses so far.
    pub fn attempts(&self) -> u8 {
        self.round.attempts
    }

    /// Attempt budget of the session.
    pub fn max_attempts(&self) -> u8 {
        MAX_ATTEMPTS
    }

    /// Whether guesses are still being taken.
    pub fn is_active(&self) -> bool {
        self.round.active
    }

    /// Accepted guesses in submission order.
    pub fn history(&self) -> &[u8] {
        &self.round.history
    }

    /// Owned copy of everything a presentation layer may show.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            attempts: self.attempts(),
            remaining: self.remaining(),
            max_attempts: MAX_ATTEMPTS,
            active: self.is_active(),
            history: self.round.history.clone(),
        }
    }

    pub(crate) fn round(&self) -> &Round {
        &self.round
    }
}

impl<S> std::fmt::Debug for GameSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("attempts", &self.round.attempts)
            .field("history", &self.round.history)
            .field("active", &self.round.active)
            .finish_non_exhaustive()
    }
}

fn draw<S: TargetSource>(source: &mut S) -> u8 {
    let range = guess_range();
    let drawn = source.draw_target(range.clone());
    if !range.contains(&drawn) {
        warn!(drawn, "Target source left the guess range, clamping");
    }
    let target = drawn.clamp(*range.start(), *range.end());
    trace!(target, "Secret target drawn");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedTarget, ScriptedTargets};

    #[test]
    fn test_new_session_is_active_and_empty() {
        let session = GameSession::with_source(FixedTarget::new(50));
        assert!(session.is_active());
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.remaining(), 10);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_inactive_check_precedes_parsing() {
        let mut session = GameSession::with_source(FixedTarget::new(5));
        assert_eq!(session.submit_guess("5"), Outcome::Won { attempts: 1 });
        assert_eq!(session.submit_guess("abc"), Outcome::SessionInactive);
        assert_eq!(session.submit_guess("500"), Outcome::SessionInactive);
    }

    #[test]
    fn test_winning_on_last_attempt_is_a_win() {
        let mut session = GameSession::with_source(FixedTarget::new(100));
        for guess in 1..=9 {
            session.submit_guess(&guess.to_string());
        }
        assert_eq!(session.submit_guess("100"), Outcome::Won { attempts: 10 });
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_reset_draws_next_target() {
        let mut session = GameSession::with_source(ScriptedTargets::new([10, 20]));
        assert_eq!(session.round().target, 10);
        session.submit_guess("10");
        session.reset();
        assert_eq!(session.round().target, 20);
        assert_eq!(session.round(), &Round::new(20));
    }

    #[test]
    fn test_debug_hides_target() {
        let session = GameSession::with_source(FixedTarget::new(73));
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("73"));
        assert!(!rendered.contains("target"));
    }

    #[test]
    fn test_snapshot_mirrors_reads() {
        let mut session = GameSession::with_source(FixedTarget::new(50));
        session.submit_guess("25");
        session.submit_guess("75");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.attempts, 2);
        assert_eq!(snapshot.remaining, 8);
        assert_eq!(snapshot.history, vec![25, 75]);
        assert_eq!(snapshot.last_guess(), Some(75));
        assert!(snapshot.active);
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = GameSession::seeded(9);
        let mut b = GameSession::seeded(9);
        for raw in ["50", "25", "75", "12", "88"] {
            assert_eq!(a.submit_guess(raw), b.submit_guess(raw));
        }
    }
}
