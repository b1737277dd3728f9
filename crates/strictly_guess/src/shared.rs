//! Thread-safe handle to a single session.
//!
//! `submit_guess` reads, validates and mutates in one step, so concurrent
//! callers must never interleave inside it. Every operation here takes the
//! session's one lock for its whole duration.

use super::session::GameSession;
use super::target::TargetSource;
use super::types::{Outcome, SessionSnapshot};
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// A session shared between threads behind a single mutex.
#[derive(Debug)]
pub struct SharedSession<S = StdRng> {
    inner: Arc<Mutex<GameSession<S>>>,
}

impl<S> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TargetSource> SharedSession<S> {
    /// Wraps `session` for shared use.
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Submits raw input under the session lock.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, raw: &str) -> Outcome {
        self.lock().submit_guess(raw)
    }

    /// Resets the session under the lock.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Consistent view of the session at one instant.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut GameSession<S>) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, GameSession<S>> {
        // A round is always whole between operations, so a poisoned lock
        // still guards a valid session.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Session lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
