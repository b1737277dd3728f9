//! Strictly Guess front ends.
//!
//! Presentation for the [`strictly_guess`] game: a ratatui terminal UI and a
//! line-oriented mode for pipes. Both drive a [`GameSession`] through a
//! [`Controller`] and render from the same [`Scoreboard`].
//!
//! # Example
//!
//! ```
//! use strictly_guess::{FixedTarget, GameSession};
//! use strictly_guess_tui::{Controller, Scoreboard};
//!
//! let session = GameSession::with_source(FixedTarget::new(42));
//! let mut controller = Controller::new(session, Scoreboard::new());
//! controller.submit("42");
//! assert_eq!(controller.surface().history_line(), "42(correct)");
//! ```
//!
//! [`GameSession`]: strictly_guess::GameSession

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod celebration;
mod controller;
mod feedback;
mod plain;
mod scoreboard;
mod settings;
mod surface;
mod tui;

pub use celebration::{Celebration, PALETTE, Particle, Sprite};
pub use controller::Controller;
pub use feedback::{Feedback, FeedbackKind, GuessTag, TaggedGuess};
pub use plain::{run_plain, run_plain_stdio};
pub use scoreboard::Scoreboard;
pub use settings::{CelebrationSettings, Settings, SettingsError};
pub use surface::PresentationSurface;
pub use tui::{App, InputAction, TuiSurface, draw, map_key, run_tui};
