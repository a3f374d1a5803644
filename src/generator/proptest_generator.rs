//! Property-based tests for system generation using proptest.
//!
//! Every seed must yield a system inside the configured bands.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use super::{GeneratorConfig, SystemGenerator, in_habitable_window, moon_count_limit, names};
use crate::body::{BodyKind, LifeStatus};
use crate::orbit;
use crate::types::AU_TO_METERS;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Planet count stays in [5, 8] and orbits strictly increase outward.
    #[test]
    fn prop_planet_count_and_spacing(seed in any::<u64>()) {
        let mut generator = SystemGenerator::new(ChaCha8Rng::seed_from_u64(seed));
        let system = generator.generate_star_system().unwrap();

        let count = system.planet_ids().len();
        prop_assert!((5..=8).contains(&count), "count = {}", count);

        let axes: Vec<f64> = system
            .planets()
            .map(|p| p.orbit().unwrap().semi_major_axis)
            .collect();
        for pair in axes.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    /// Every orbiting body satisfies Kepler's third law against its parent.
    #[test]
    fn prop_kepler_relations(seed in any::<u64>()) {
        let mut generator = SystemGenerator::new(ChaCha8Rng::seed_from_u64(seed));
        let system = generator.generate_star_system().unwrap();

        for body in system.bodies() {
            let Some(parent) = body.parent().and_then(|p| system.get(p)) else {
                prop_assert_eq!(body.kind(), BodyKind::Star);
                continue;
            };
            let a = body.orbit().unwrap().semi_major_axis;
            let period = orbit::orbital_period(a, parent.mass());
            let velocity = orbit::orbital_velocity(a, parent.mass());
            prop_assert!((body.orbital_period() - period).abs() <= period * 1e-12);
            prop_assert!((body.orbital_velocity() - velocity).abs() <= velocity * 1e-12);
            prop_assert!(body.orbit().unwrap().eccentricity < 1.0);
        }
    }

    /// Parents follow the star, planet, moon hierarchy.
    #[test]
    fn prop_hierarchy(seed in any::<u64>()) {
        let mut generator = SystemGenerator::new(ChaCha8Rng::seed_from_u64(seed));
        let system = generator.generate_star_system().unwrap();

        for planet in system.planets() {
            prop_assert_eq!(planet.parent(), Some(system.star_id()));
            for &moon in planet.satellites() {
                let moon = system.get(moon).unwrap();
                prop_assert_eq!(moon.kind(), BodyKind::Moon);
                prop_assert_eq!(moon.parent(), Some(planet.id()));
            }
        }
        prop_assert_eq!(system.all_bodies().len(), system.len());
    }

    /// Moon counts respect the mass bands; life only appears inside the window.
    #[test]
    fn prop_moons_and_life(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let mut generator = SystemGenerator::new(ChaCha8Rng::seed_from_u64(seed));
        let system = generator.generate_star_system().unwrap();

        for planet in system.planets() {
            let limit = moon_count_limit(planet.mass_ratio()) as usize;
            prop_assert!(planet.satellites().len() < limit);

            if planet.life_status() != LifeStatus::None {
                let a = planet.orbit().unwrap().semi_major_axis;
                prop_assert!(in_habitable_window(&config, a, planet.mass()));
            }
        }
        for moon in system.moons() {
            prop_assert_eq!(moon.life_status(), LifeStatus::None);
            prop_assert!(moon.orbit().unwrap().semi_major_axis < AU_TO_METERS);
        }
    }

    /// Names never repeat while the pools last.
    #[test]
    fn prop_names_unique(seed in any::<u64>()) {
        let mut generator = SystemGenerator::new(ChaCha8Rng::seed_from_u64(seed));
        let system = generator.generate_star_system().unwrap();

        let planet_names: HashSet<&str> = system.planets().map(|p| p.name()).collect();
        prop_assert_eq!(planet_names.len(), system.planet_ids().len());

        let moons: Vec<&str> = system.moons().map(|m| m.name()).collect();
        let pooled: Vec<&str> = moons.iter().copied().take(names::MOON_NAMES.len()).collect();
        let unique: HashSet<&str> = pooled.iter().copied().collect();
        prop_assert_eq!(unique.len(), pooled.len());
    }
}
