//! Win celebration as a one-shot list of timed render instructions.
//!
//! The plan is built once when a round is won. Rendering only asks which
//! particles are on screen at a given elapsed time, so the game never waits
//! on the animation.

use crate::settings::CelebrationSettings;
use derive_getters::Getters;
use rand::Rng;
use ratatui::style::Color;
use std::time::Duration;
use tracing::{debug, instrument};

/// Confetti colours.
pub const PALETTE: [Color; 5] = [
    Color::Rgb(0x66, 0x7e, 0xea),
    Color::Rgb(0x76, 0x4b, 0xa2),
    Color::Rgb(0x48, 0xbb, 0x78),
    Color::Rgb(0xed, 0x89, 0x36),
    Color::Rgb(0xe5, 0x3e, 0x3e),
];

/// One confetti particle.
#[derive(Debug, Clone, Copy, PartialEq, Getters, derive_new::new)]
pub struct Particle {
    /// When the particle appears, measured from the win.
    spawn_at: Duration,
    /// Horizontal position as a fraction of the width, in `[0, 1)`.
    column: f32,
    /// Fill colour.
    color: Color,
    /// Pause after spawning before the fall starts.
    delay: Duration,
    /// How long the fall from top to bottom takes.
    fall: Duration,
    /// When the particle is removed, measured from the win.
    expires_at: Duration,
}

impl Particle {
    /// Fall progress in `[0, 1)` at `elapsed`, or `None` when not on screen.
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let start = self.spawn_at.saturating_add(self.delay);
        if elapsed < start || elapsed >= self.expires_at || self.fall.is_zero() {
            return None;
        }
        let progress = (elapsed - start).as_secs_f32() / self.fall.as_secs_f32();
        (progress < 1.0).then_some(progress)
    }
}

/// A particle positioned for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Horizontal position as a fraction of the width.
    pub column: f32,
    /// Vertical position as a fraction of the height.
    pub row: f32,
    /// Fill colour.
    pub color: Color,
}

/// A planned confetti burst.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Celebration {
    particles: Vec<Particle>,
}

impl Celebration {
    /// Plans a burst: particle `i` spawns at `i * spawn_interval` with a
    /// random column, colour, start delay and fall time.
    #[instrument(skip(rng))]
    pub fn plan<R: Rng + ?Sized>(rng: &mut R, settings: &CelebrationSettings) -> Self {
        let interval = Duration::from_millis(*settings.spawn_interval_ms());
        let lifetime = Duration::from_millis(*settings.lifetime_ms());

        let particles: Vec<Particle> = (0..u32::from(*settings.particles()))
            .map(|i| {
                let spawn_at = interval.saturating_mul(i);
                let delay = Duration::from_millis(rng.gen_range(0..=*settings.max_delay_ms()));
                let fall = Duration::from_millis(
                    settings
                        .min_fall_ms()
                        .saturating_add(rng.gen_range(0..=*settings.fall_jitter_ms())),
                );
                Particle::new(
                    spawn_at,
                    rng.gen_range(0.0..1.0),
                    PALETTE[rng.gen_range(0..PALETTE.len())],
                    delay,
                    fall,
                    spawn_at.saturating_add(lifetime),
                )
            })
            .collect();

        debug!(count = particles.len(), "Celebration planned");
        Self { particles }
    }

    /// Particles on screen at `elapsed`.
    pub fn visible(&self, elapsed: Duration) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().filter_map(move |p| {
            p.progress(elapsed).map(|row| Sprite {
                column: p.column,
                row,
                color: p.color,
            })
        })
    }

    /// Whether every particle has been removed.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.particles.iter().all(|p| elapsed >= p.expires_at)
    }
}
