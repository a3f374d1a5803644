//! Per-frame driver that owns the current system and its time controller.
//!
//! Every tick converts a wall-clock delta into simulated seconds and advances
//! the bodies parent-first, so each moon is placed around its planet's
//! position from the same tick.

use bevy::log::info;
use bevy::math::Vec3;
use rand::Rng;
use rand::rngs::StdRng;

use crate::body::{BodyError, BodyId, BodyInfo, CelestialBody};
use crate::generator::{SystemGenerator, presets};
use crate::system::StarSystem;
use crate::time::TimeController;
use crate::types::SECONDS_PER_YEAR;

/// Wall-clock seconds that make one simulated year at 1× in the interactive presets.
pub const REAL_SECONDS_PER_YEAR: f64 = 60.0;

/// Pacing between wall-clock time and simulated time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockConfig {
    /// Simulated seconds per wall-clock second at 1×, before the speed ladder
    pub sim_seconds_per_real_second: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sim_seconds_per_real_second: 1.0,
        }
    }
}

impl ClockConfig {
    /// One simulated year per minute at 1×, fast enough to watch planets move.
    pub fn year_per_minute() -> Self {
        Self {
            sim_seconds_per_real_second: SECONDS_PER_YEAR / REAL_SECONDS_PER_YEAR,
        }
    }
}

/// A body selected for the camera to frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Focus {
    pub info: BodyInfo,
    /// Position in render units at the time of the request
    pub scene_position: Vec3,
}

/// Owns the running system, the generator that replaces it, and simulated time.
#[derive(Debug)]
pub struct SimulationClock<R: Rng = StdRng> {
    generator: SystemGenerator<R>,
    time: TimeController,
    config: ClockConfig,
    system: Option<StarSystem>,
}

impl SimulationClock<StdRng> {
    /// Clock with an entropy-seeded generator and no system yet.
    pub fn from_entropy(config: ClockConfig) -> Self {
        Self::new(SystemGenerator::from_entropy(), config)
    }
}

impl<R: Rng> SimulationClock<R> {
    pub fn new(generator: SystemGenerator<R>, config: ClockConfig) -> Self {
        Self {
            generator,
            time: TimeController::new(),
            config,
            system: None,
        }
    }

    /// Build a new system, replacing the current one if any.
    pub fn generate(&mut self) -> Result<&StarSystem, BodyError> {
        let system = self.generator.generate_star_system()?;
        Ok(self.system.insert(system))
    }

    /// Discard the current system, build a new one, and restart the year counter.
    ///
    /// Speed and pause state carry over.
    pub fn regenerate(&mut self) -> Result<&StarSystem, BodyError> {
        if let Some(old) = self.system.take() {
            info!("Discarding {} ({} bodies)", old.designation(), old.len());
        }
        self.time.reset_elapsed();
        self.generate()
    }

    /// Replace the current system with the fixed Sol-like preset.
    pub fn load_solar_system(&mut self) -> Result<&StarSystem, BodyError> {
        let stamp = self.generator.next_stamp();
        let system = presets::solar_system(stamp, self.generator.rng_mut())?;
        info!("Loaded preset system {}", system.designation());
        self.time.reset_elapsed();
        Ok(self.system.insert(system))
    }

    /// Reset time to its initial state and regenerate.
    pub fn reset(&mut self) -> Result<&StarSystem, BodyError> {
        info!("Resetting simulation");
        self.time.reset();
        self.regenerate()
    }

    /// Advance by `wall_delta` real seconds and return the simulated seconds applied.
    ///
    /// A zero simulated delta, e.g. while paused, leaves every body untouched.
    pub fn tick(&mut self, wall_delta: f64) -> f64 {
        let sim_delta = self
            .time
            .update(wall_delta * self.config.sim_seconds_per_real_second);
        if sim_delta == 0.0 {
            return 0.0;
        }
        if let Some(system) = self.system.as_mut() {
            system.advance_all(sim_delta);
        }
        sim_delta
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.time.is_paused() {
            info!("Simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.time.set_paused(paused);
    }

    /// Flip the pause state and return whether the clock is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.time.toggle_pause();
        info!("Simulation {}", if paused { "paused" } else { "resumed" });
        paused
    }

    pub fn speed_up(&mut self) -> f64 {
        let scale = self.time.speed_up();
        info!("Speed {}", self.time.speed_label());
        scale
    }

    pub fn slow_down(&mut self) -> f64 {
        let scale = self.time.slow_down();
        info!("Speed {}", self.time.speed_label());
        scale
    }

    /// Snapshot and scene position of a body, for the camera to frame.
    ///
    /// Ids from a discarded system resolve to `None`.
    pub fn focus(&self, id: BodyId) -> Option<Focus> {
        let system = self.system.as_ref()?;
        let info = system.describe(id)?;
        let scene_position = system.get(id)?.scene_position();
        Some(Focus {
            info,
            scene_position,
        })
    }

    pub fn find(&self, name: &str) -> Option<&CelestialBody> {
        self.system.as_ref()?.find_by_name(name)
    }

    pub fn system(&self) -> Option<&StarSystem> {
        self.system.as_ref()
    }

    pub fn time(&self) -> &TimeController {
        &self.time
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn generator(&self) -> &SystemGenerator<R> {
        &self.generator
    }
}
