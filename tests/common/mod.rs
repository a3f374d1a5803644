//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use orrery::body::CelestialBody;
use orrery::{ClockConfig, SimulationClock, StarSystem, SystemGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Clock with a seeded generator and a system already generated.
pub fn seeded_clock(seed: u64) -> SimulationClock {
    let mut clock = SimulationClock::new(
        SystemGenerator::new(StdRng::seed_from_u64(seed)),
        ClockConfig::default(),
    );
    clock.generate().expect("default config always generates");
    clock
}

/// Position a body should have given its parent's current position.
pub fn expected_position(system: &StarSystem, body: &CelestialBody) -> bevy::math::DVec3 {
    let Some(orbit) = body.orbit() else {
        return bevy::math::DVec3::ZERO;
    };
    let offset = orbit.position_at(body.angle());
    match body.parent().and_then(|p| system.get(p)) {
        Some(parent) if parent.parent().is_some() => parent.position() + offset,
        _ => offset,
    }
}

/// Minimal Bevy app for headless tests, with keyboard input available.
pub fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<KeyCode>>();
    app
}
