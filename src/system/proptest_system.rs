//! Property-based tests for body advancement using proptest.
//!
//! These tests verify the nested reference frames hold for arbitrary tick
//! sequences, not only for hand-picked deltas.

use proptest::prelude::*;

use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After any sequence of ticks, each moon sits at its planet's position
    /// plus its own ellipse offset, and the star stays at the origin.
    #[test]
    fn prop_moon_tracks_planet(
        deltas in prop::collection::vec(0.0f64..5.0e6, 1..20),
    ) {
        let mut system = fixtures::earth_like_system(0);
        for dt in &deltas {
            system.advance_all(*dt);
        }

        prop_assert_eq!(system.star().position(), bevy::math::DVec3::ZERO);
        for planet in system.planets() {
            for &moon_id in planet.satellites() {
                let moon = system.get(moon_id).unwrap();
                let offset = moon.orbit().unwrap().position_at(moon.angle());
                let error = (moon.position() - (planet.position() + offset)).length();
                prop_assert!(error < 1e-3, "moon off its frame by {} m", error);
            }
        }
    }

    /// Splitting a delta across two ticks lands on the same phase as one tick.
    #[test]
    fn prop_advance_is_additive(
        first in 0.0f64..1.0e7,
        second in 0.0f64..1.0e7,
    ) {
        let mut split = fixtures::earth_like_system(0);
        split.advance_all(first);
        split.advance_all(second);

        let mut whole = fixtures::earth_like_system(0);
        whole.advance_all(first + second);

        for (a, b) in split.bodies().iter().zip(whole.bodies()) {
            prop_assert!((a.angle() - b.angle()).abs() < 1e-9);
            let scale = a.position().length().max(1.0);
            prop_assert!((a.position() - b.position()).length() / scale < 1e-9);
        }
    }
}
