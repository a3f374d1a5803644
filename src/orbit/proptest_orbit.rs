//! Property-based tests for orbit math using proptest.
//!
//! These tests verify that the ellipse and period formulas keep their
//! expected relations across the ranges the generator draws from.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::{Orbit, advance_angle, orbital_period, orbital_velocity, position_on_ellipse};
use crate::types::{AU_TO_METERS, EARTH_MASS, G, SOLAR_MASS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// T² / a³ = 4π² / GM for every semi-major axis and central mass.
    #[test]
    fn prop_orbital_period_matches_kepler(
        semi_major_axis_au in 0.01f64..100.0,
        mass_solar in 0.05f64..5.0,
    ) {
        let a = semi_major_axis_au * AU_TO_METERS;
        let m = mass_solar * SOLAR_MASS;
        let period = orbital_period(a, m);

        let lhs = period * period / (a * a * a);
        let rhs = TAU * TAU / (G * m);
        let error = ((lhs - rhs) / rhs).abs();
        prop_assert!(error < 1e-9, "Kepler's third law violated: {} vs {}", lhs, rhs);
    }

    /// v = √(GM/a) stays finite and positive for any bound configuration.
    #[test]
    fn prop_orbital_velocity_positive(
        semi_major_axis_au in 0.001f64..100.0,
        mass_earth in 0.001f64..400.0,
    ) {
        let v = orbital_velocity(semi_major_axis_au * AU_TO_METERS, mass_earth * EARTH_MASS);
        prop_assert!(v.is_finite() && v > 0.0);
    }

    /// Distance from the focus stays between periapsis and apoapsis.
    #[test]
    fn prop_radius_within_apsides(
        semi_major_axis_au in 0.1f64..50.0,
        eccentricity in 0.0f64..0.95,
        inclination in 0.0f64..0.5,
        angle in -100.0f64..100.0,
    ) {
        let orbit = Orbit::new(semi_major_axis_au * AU_TO_METERS, eccentricity, inclination);
        let r = orbit.radius_at(angle);
        let slack = orbit.semi_major_axis * 1e-12;
        prop_assert!(r >= orbit.periapsis() - slack);
        prop_assert!(r <= orbit.apoapsis() + slack);

        // The XZ projection always carries the full conic radius
        let p = orbit.position_at(angle);
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        prop_assert!(((planar - r) / r).abs() < 1e-9);
    }

    /// Advancing by exactly one period returns the body to where it started.
    #[test]
    fn prop_position_periodic(
        semi_major_axis_au in 0.1f64..30.0,
        eccentricity in 0.0f64..0.15,
        inclination in 0.0f64..0.1,
        start in 0.0f64..TAU,
    ) {
        let a = semi_major_axis_au * AU_TO_METERS;
        let period = orbital_period(a, SOLAR_MASS);
        let end = advance_angle(start, period, period);

        prop_assert!((end - (start + TAU)).abs() < 1e-9);

        let p0 = position_on_ellipse(a, eccentricity, inclination, start);
        let p1 = position_on_ellipse(a, eccentricity, inclination, end);
        let drift = (p1 - p0).length() / a;
        prop_assert!(drift < 1e-9, "relative drift {} after one period", drift);
    }
}
