//! Drives a session and keeps a presentation surface in step with it.

use crate::surface::PresentationSurface;
use strictly_guess::{GameSession, Outcome, TargetSource};
use tracing::{info, instrument};

/// Owns a session and the surface rendering it.
///
/// Presentation code translates raw UI events into calls here and never
/// mutates the session directly.
#[derive(Debug)]
pub struct Controller<S, P> {
    session: GameSession<S>,
    surface: P,
}

impl<S: TargetSource, P: PresentationSurface> Controller<S, P> {
    /// Pairs `session` with `surface` and shows the ready state.
    #[instrument(skip_all)]
    pub fn new(session: GameSession<S>, mut surface: P) -> Self {
        surface.show_ready(&session.snapshot());
        Self { session, surface }
    }

    /// Submits raw input and notifies the surface of the outcome.
    #[instrument(skip(self))]
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let outcome = self.session.submit_guess(raw);
        self.surface.show_outcome(&outcome, &self.session.snapshot());
        outcome
    }

    /// Starts a new round and shows the ready state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.reset();
        self.surface.show_ready(&self.session.snapshot());
        info!("New round started");
    }

    /// The underlying session, read-only.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// The surface being driven.
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Mutable access to the surface for presentation-only state.
    pub fn surface_mut(&mut self) -> &mut P {
        &mut self.surface
    }
}
