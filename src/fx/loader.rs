//! Loading bar sequencer
//!
//! Progress climbs by a random increment every tick until it reaches 100%.
//! Completion is reported on exactly one tick; after that the sequencer is
//! inert and the caller should stop ticking.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::FxConfig;
use crate::consts::LOADER_MAX_INCREMENT;

/// Result of one loader tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadStep {
    /// Progress after this tick, in percent (0..=100)
    pub progress: f32,
    /// True only on the tick that reached 100%
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct Loader {
    progress: f32,
    ticks: u32,
    done: bool,
    max_increment: f32,
    max_ticks: u32,
    rng: Pcg32,
}

impl Loader {
    pub fn new(seed: u64, max_increment: f32, max_ticks: u32) -> Self {
        Self {
            progress: 0.0,
            ticks: 0,
            done: false,
            max_increment: if max_increment.is_finite() {
                max_increment.max(0.0)
            } else {
                LOADER_MAX_INCREMENT
            },
            max_ticks,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_config(seed: u64, config: &FxConfig) -> Self {
        Self::new(seed, config.loader_max_increment, config.loader_max_ticks)
    }

    /// Advance one tick. Returns `None` once the loader has completed.
    pub fn tick(&mut self) -> Option<LoadStep> {
        if self.done {
            return None;
        }

        self.ticks += 1;
        if self.max_increment > 0.0 {
            self.progress += self.rng.random_range(0.0..self.max_increment);
        }

        // The tick cap forces completion if the random walk stalls
        if self.progress >= 100.0 || self.ticks >= self.max_ticks {
            self.progress = 100.0;
            self.done = true;
        }

        Some(LoadStep {
            progress: self.progress,
            completed: self.done,
        })
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Bar width as a CSS percentage
    pub fn bar_width(&self) -> String {
        format!("{}%", self.progress())
    }
}
