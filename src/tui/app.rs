//! Terminal application state.

use super::input::{InputAction, map_key};
use crate::celebration::{Celebration, Sprite};
use crate::controller::Controller;
use crate::scoreboard::Scoreboard;
use crate::settings::CelebrationSettings;
use crate::surface::PresentationSurface;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use std::time::Instant;
use strictly_guess::{GameSession, Outcome, SessionSnapshot, TargetSource, is_submittable};
use tracing::{debug, info, instrument};

/// Longest text the guess prompt holds.
const MAX_INPUT_LEN: usize = 8;

/// Surface for the terminal: the scoreboard plus a running celebration.
#[derive(Debug)]
pub struct TuiSurface {
    board: Scoreboard,
    celebration: Option<(Celebration, Instant)>,
    settings: CelebrationSettings,
    rng: StdRng,
}

impl TuiSurface {
    /// Creates a surface planning confetti with `rng`.
    pub fn new(settings: CelebrationSettings, rng: StdRng) -> Self {
        Self {
            board: Scoreboard::new(),
            celebration: None,
            settings,
            rng,
        }
    }

    /// The scoreboard being shown.
    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Whether confetti is currently scheduled.
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Particles to draw at `now`.
    pub fn sprites(&self, now: Instant) -> Vec<Sprite> {
        match &self.celebration {
            Some((celebration, started)) => celebration
                .visible(now.saturating_duration_since(*started))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Drops a celebration whose particles have all expired.
    pub fn tick(&mut self, now: Instant) {
        if let Some((celebration, started)) = &self.celebration
            && celebration.is_finished(now.saturating_duration_since(*started))
        {
            debug!("Celebration finished");
            self.celebration = None;
        }
    }
}

impl PresentationSurface for TuiSurface {
    fn show_ready(&mut self, snapshot: &SessionSnapshot) {
        self.board.show_ready(snapshot);
        self.celebration = None;
    }

    fn show_outcome(&mut self, outcome: &Outcome, snapshot: &SessionSnapshot) {
        self.board.show_outcome(outcome, snapshot);
        if let Outcome::Won { .. } = outcome {
            let celebration = Celebration::plan(&mut self.rng, &self.settings);
            self.celebration = Some((celebration, Instant::now()));
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App<S = StdRng> {
    controller: Controller<S, TuiSurface>,
    input: String,
    should_quit: bool,
}

impl<S: TargetSource> App<S> {
    /// Creates the app around a session.
    pub fn new(session: GameSession<S>, surface: TuiSurface) -> Self {
        Self {
            controller: Controller::new(session, surface),
            input: String::new(),
            should_quit: false,
        }
    }

    /// Text currently typed into the prompt.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The terminal surface.
    pub fn surface(&self) -> &TuiSurface {
        self.controller.surface()
    }

    /// The scoreboard being shown.
    pub fn board(&self) -> &Scoreboard {
        self.controller.surface().board()
    }

    /// Whether Enter would submit right now.
    ///
    /// Checks format and range only; a repeated guess is still submittable
    /// and gets rejected by the session.
    pub fn submit_enabled(&self) -> bool {
        !*self.board().locked() && is_submittable(&self.input)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key, *self.board().locked(), self.input.is_empty());
        match action {
            InputAction::Insert(c) if self.input.len() < MAX_INPUT_LEN => self.input.push(c),
            InputAction::Insert(_) | InputAction::Ignore => {}
            InputAction::Backspace => {
                self.input.pop();
            }
            InputAction::Submit => self.submit(),
            InputAction::Restart => {
                self.input.clear();
                self.controller.reset();
            }
            InputAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Advances presentation-only timers.
    pub fn tick(&mut self) {
        self.controller.surface_mut().tick(Instant::now());
    }

    fn submit(&mut self) {
        if !self.submit_enabled() {
            debug!(input = %self.input, "Submit disabled for current input");
            return;
        }
        let outcome = self.controller.submit(&self.input);
        if outcome.is_accepted() {
            self.input.clear();
        }
    }
}
