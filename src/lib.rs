//! Orrery - Procedural Star System Simulator
//!
//! A library crate that generates star systems (a star, its planets, and
//! their moons) and advances them along fixed Keplerian ellipses, with a
//! Bevy plugin that drives the simulation once per frame.

pub mod body;
pub mod clock;
pub mod generator;
pub mod orbit;
pub mod plugin;
pub mod system;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use clock::{ClockConfig, SimulationClock};
pub use generator::{GeneratorConfig, SystemGenerator};
pub use plugin::OrreryPlugin;
pub use system::StarSystem;
