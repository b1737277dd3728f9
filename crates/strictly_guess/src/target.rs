//! Sources of secret targets.
//!
//! Sessions never reach for an ambient RNG. Any [`rand::Rng`] works as a
//! source, so seeded generators give reproducible games, and
//! [`FixedTarget`] / [`ScriptedTargets`] pin the target exactly.

use super::types::guess_range;
use rand::Rng;
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Draws the secret target for a new round.
pub trait TargetSource {
    /// Returns a target inside `range`.
    fn draw_target(&mut self, range: RangeInclusive<u8>) -> u8;
}

impl<R: Rng> TargetSource for R {
    fn draw_target(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.gen_range(range)
    }
}

/// Always draws the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(u8);

impl FixedTarget {
    /// Creates a source that always yields `target`.
    ///
    /// Values outside the guess range are clamped into it.
    pub fn new(target: u8) -> Self {
        let range = guess_range();
        Self(target.clamp(*range.start(), *range.end()))
    }
}

impl TargetSource for FixedTarget {
    fn draw_target(&mut self, _range: RangeInclusive<u8>) -> u8 {
        self.0
    }
}

/// Yields targets from a list, one per round, repeating the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTargets {
    queue: VecDeque<u8>,
    last: u8,
}

impl ScriptedTargets {
    /// Creates a source yielding `targets` in order.
    ///
    /// An empty script behaves like a fixed target at the lower bound.
    pub fn new(targets: impl IntoIterator<Item = u8>) -> Self {
        let range = guess_range();
        let queue: VecDeque<u8> = targets
            .into_iter()
            .map(|t| t.clamp(*range.start(), *range.end()))
            .collect();
        Self {
            queue,
            last: *range.start(),
        }
    }
}

impl TargetSource for ScriptedTargets {
    fn draw_target(&mut self, _range: RangeInclusive<u8>) -> u8 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}
