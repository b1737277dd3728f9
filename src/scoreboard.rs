//! Render-ready state shared by every presentation surface.

use crate::feedback::{Feedback, GuessTag, TaggedGuess};
use crate::surface::PresentationSurface;
use derive_getters::Getters;
use strictly_guess::{MAX_ATTEMPTS, Outcome, SessionSnapshot};
use tracing::{debug, instrument, warn};

/// What a surface displays: counters, tagged guesses, feedback, and whether
/// input is locked.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    attempts: u8,
    remaining: u8,
    max_attempts: u8,
    guesses: Vec<TaggedGuess>,
    feedback: Feedback,
    locked: bool,
}

impl Scoreboard {
    /// Creates an empty scoreboard showing the ready prompt.
    pub fn new() -> Self {
        Self {
            attempts: 0,
            remaining: MAX_ATTEMPTS,
            max_attempts: MAX_ATTEMPTS,
            guesses: Vec::new(),
            feedback: Feedback::ready(),
            locked: false,
        }
    }

    /// One-line counter summary.
    pub fn stats_line(&self) -> String {
        format!("Attempts: {}  Remaining: {}", self.attempts, self.remaining)
    }

    /// Guess list as `value(tag)` chips.
    pub fn history_line(&self) -> String {
        self.guesses
            .iter()
            .map(|g| format!("{}({})", g.value(), g.tag()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sync_counts(&mut self, snapshot: &SessionSnapshot) {
        self.attempts = snapshot.attempts;
        self.remaining = snapshot.remaining;
        self.max_attempts = snapshot.max_attempts;
        self.locked = !snapshot.active;
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for Scoreboard {
    #[instrument(skip_all)]
    fn show_ready(&mut self, snapshot: &SessionSnapshot) {
        self.sync_counts(snapshot);
        self.guesses.clear();
        self.feedback = Feedback::ready();
        debug!("Scoreboard ready");
    }

    #[instrument(skip(self, snapshot))]
    fn show_outcome(&mut self, outcome: &Outcome, snapshot: &SessionSnapshot) {
        self.sync_counts(snapshot);
        self.feedback = Feedback::for_outcome(outcome);

        if outcome.is_accepted() {
            match snapshot
                .last_guess()
                .and_then(|g| GuessTag::for_outcome(g, outcome).map(|t| TaggedGuess::new(g, t)))
            {
                Some(entry) => self.guesses.push(entry),
                None => warn!("Accepted outcome without a recorded guess"),
            }
        }
    }
}
