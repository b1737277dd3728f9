//! Terminal UI for Strictly Guess.

mod app;
mod input;
mod ui;

pub use app::{App, TuiSurface};
pub use input::{InputAction, map_key};
pub use ui::draw;

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_guess::{GameSession, TargetSource};
use tracing::{error, info, instrument};

/// Runs the terminal game until the player quits.
///
/// With a `seed`, both the targets and the confetti are reproducible.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings, seed: Option<u64>) -> Result<()> {
    info!("Starting Strictly Guess TUI");

    let (session, confetti_rng) = match seed {
        Some(seed) => (
            GameSession::seeded(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (GameSession::new(), StdRng::from_entropy()),
    };
    let surface = TuiSurface::new(settings.celebration().clone(), confetti_rng);
    let mut app = App::new(session, surface);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, settings.tick());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Strictly Guess TUI stopped");
    res
}

/// Redraws every `tick` and feeds key presses to the app.
#[instrument(skip_all)]
fn run_app<S: TargetSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
    tick: Duration,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
}
