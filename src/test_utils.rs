//! Test utilities for orbit and generator tests.
//!
//! Provides small hand-built systems and a random source that replays
//! scripted draws so tests can pin the outcome of a specific roll.

use rand::RngCore;

/// Fixtures for creating test systems.
pub mod fixtures {
    use crate::body::{BodyConfig, LifeStatus};
    use crate::orbit::Orbit;
    use crate::system::StarSystem;
    use crate::types::{AU_TO_METERS, EARTH_MASS, EARTH_RADIUS, LUNAR_MASS, LUNAR_RADIUS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Distance of the fixture moon from its planet, in meters.
    pub const LUNA_DISTANCE: f64 = 3.844e8;

    /// A Sun-like star with one Earth-like planet (life confirmed) and one moon.
    ///
    /// All phases start at zero, so the planet sits on the +X axis at 1 AU.
    pub fn earth_like_system(stamp: u32) -> StarSystem {
        let mut rng = ChaCha8Rng::seed_from_u64(stamp as u64);
        let mut system = StarSystem::new(stamp, "Test 0001", BodyConfig::star("Sol")).unwrap();
        let star = system.star_id();
        let earth = system
            .spawn(
                BodyConfig::planet("Terra", Orbit::new(AU_TO_METERS, 0.0167, 0.0))
                    .with_mass(EARTH_MASS)
                    .with_radius(EARTH_RADIUS)
                    .with_life_status(LifeStatus::Confirmed)
                    .with_initial_angle(0.0),
                star,
                &mut rng,
            )
            .unwrap();
        system
            .spawn_satellite(
                earth,
                BodyConfig::moon("Luna", Orbit::new(LUNA_DISTANCE, 0.0549, 0.09))
                    .with_mass(LUNAR_MASS)
                    .with_radius(LUNAR_RADIUS)
                    .with_initial_angle(0.0),
                &mut rng,
            )
            .unwrap();
        system
    }
}

/// Random source that replays fixed `f64` draws in `[0, 1)`.
///
/// Each value is encoded so that `Rng::gen::<f64>()` returns it exactly when
/// it is a multiple of 2⁻⁵³, and the next such multiple otherwise. Once the
/// script runs out it repeats the last value.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "script needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "scripted draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// How many draws have been consumed.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        let i = self.cursor.min(self.draws.len() - 1);
        self.cursor += 1;
        self.draws[i]
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // `Standard` for f64 keeps the top 53 bits: (u >> 11) * 2^-53.
        // Rounding up makes the replayed draw the smallest step >= the scripted one.
        let steps = (1u64 << 53) as f64;
        let mantissa = (self.next_draw() * steps).ceil().min(steps - 1.0) as u64;
        mantissa << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_scripted_rng_replays_exact_draws() {
        let mut rng = ScriptedRng::new(vec![0.25, 0.5, 0.75]);
        assert_eq!(rng.r#gen::<f64>(), 0.25);
        assert_eq!(rng.r#gen::<f64>(), 0.5);
        assert_eq!(rng.r#gen::<f64>(), 0.75);
        // Repeats the last draw once exhausted
        assert_eq!(rng.r#gen::<f64>(), 0.75);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_scripted_rng_near_boundaries() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.299_999_999, 0.3]);
        assert_eq!(rng.r#gen::<f64>(), 0.0);
        assert!(rng.r#gen::<f64>() < 0.3);
        assert!(rng.r#gen::<f64>() >= 0.3);
    }

    #[test]
    fn test_earth_like_fixture() {
        let system = fixtures::earth_like_system(0);
        assert_eq!(system.len(), 3);
        assert_eq!(system.planet_ids().len(), 1);
        assert_eq!(system.moons().count(), 1);
    }
}
