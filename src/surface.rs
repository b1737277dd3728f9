//! The notification interface between a session and whatever renders it.

use strictly_guess::{Outcome, SessionSnapshot};

/// Something that renders a guessing session.
///
/// The [`Controller`](crate::Controller) calls into a surface after every
/// state change; the surface never touches the session itself.
pub trait PresentationSurface {
    /// A fresh round started.
    fn show_ready(&mut self, snapshot: &SessionSnapshot);

    /// A submission produced `outcome`; `snapshot` is the state after it.
    fn show_outcome(&mut self, outcome: &Outcome, snapshot: &SessionSnapshot);
}
