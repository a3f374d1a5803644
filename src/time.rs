//! Simulation time for the orrery.
//!
//! Converts wall-clock frame deltas into simulated seconds using a pause
//! flag and a fixed ladder of speed multipliers.

use crate::types::SECONDS_PER_YEAR;

/// Tracks elapsed simulated time, pause state, and the current speed rung.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeController {
    paused: bool,
    speed_index: usize,
    /// Simulated seconds since the last reset
    elapsed: f64,
}

impl Default for TimeController {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeController {
    /// Speed multipliers, slowest first.
    pub const SPEED_LEVELS: [f64; 8] = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 50.0, 100.0];

    /// Rung selected at start and after a reset (1×).
    pub const DEFAULT_SPEED_INDEX: usize = 2;

    pub fn new() -> Self {
        Self {
            paused: false,
            speed_index: Self::DEFAULT_SPEED_INDEX,
            elapsed: 0.0,
        }
    }

    /// Convert a wall-clock delta into simulated seconds and accumulate it.
    ///
    /// Returns exactly `0.0` while paused. Negative or non-finite deltas count
    /// as zero, so elapsed time never decreases.
    pub fn update(&mut self, wall_delta: f64) -> f64 {
        if self.paused || !wall_delta.is_finite() || wall_delta <= 0.0 {
            return 0.0;
        }
        let sim_delta = wall_delta * self.scale();
        self.elapsed += sim_delta;
        sim_delta
    }

    /// Move one rung up the ladder; stays on the top rung.
    pub fn speed_up(&mut self) -> f64 {
        self.speed_index = (self.speed_index + 1).min(Self::SPEED_LEVELS.len() - 1);
        self.scale()
    }

    /// Move one rung down the ladder; stays on the bottom rung.
    pub fn slow_down(&mut self) -> f64 {
        self.speed_index = self.speed_index.saturating_sub(1);
        self.scale()
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Zero elapsed time, return to 1×, and unpause.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Zero elapsed time only, keeping speed and pause state.
    pub fn reset_elapsed(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current speed multiplier.
    pub fn scale(&self) -> f64 {
        Self::SPEED_LEVELS[self.speed_index]
    }

    /// Speed multiplier formatted for display, e.g. "0.5x".
    pub fn speed_label(&self) -> String {
        format!("{}x", self.scale())
    }

    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    /// Simulated seconds since the last reset.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Simulated Julian years since the last reset.
    pub fn elapsed_years(&self) -> f64 {
        self.elapsed / SECONDS_PER_YEAR
    }

    /// One-based year counter: year 1 runs until one full year has elapsed.
    pub fn current_year(&self) -> u64 {
        self.elapsed_years().floor() as u64 + 1
    }
}
