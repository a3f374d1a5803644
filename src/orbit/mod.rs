//! Keplerian orbit approximations.
//!
//! Orbits are fixed ellipses: a body's phase angle advances at the mean
//! angular rate `2π / T` and its position is read off the conic equation at
//! that angle. There is no perturbation and no Kepler-equation solve, so the
//! same routine serves both initial placement and per-tick updates.
//!
//! Coordinate frame:
//! - Centred on the parent body, orbital plane is XZ, Y is "up".
//! - Inclination lifts the orbit out of the XZ plane along Y.

#[cfg(test)]
mod proptest_orbit;

use std::f64::consts::TAU;

use bevy::math::DVec3;

use crate::types::G;

/// Number of samples used for orbit lines when the caller has no preference.
pub const DEFAULT_PATH_SEGMENTS: usize = 128;

/// Orbital elements of a body around its parent.
/// Distances in meters, angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    pub eccentricity: f64,
    /// Tilt of the orbital plane in radians
    pub inclination: f64,
}

impl Orbit {
    /// Create a new orbit from its elements.
    pub fn new(semi_major_axis: f64, eccentricity: f64, inclination: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
        }
    }

    /// A circular, uninclined orbit.
    pub fn circular(semi_major_axis: f64) -> Self {
        Self::new(semi_major_axis, 0.0, 0.0)
    }

    /// Distance from the focus at the given phase angle.
    pub fn radius_at(&self, angle: f64) -> f64 {
        conic_radius(self.semi_major_axis, self.eccentricity, angle)
    }

    /// Position relative to the parent at the given phase angle.
    pub fn position_at(&self, angle: f64) -> DVec3 {
        position_on_ellipse(
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            angle,
        )
    }

    /// Closest approach to the parent (a(1 − e)).
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the parent (a(1 + e)).
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// Orbital period in seconds: `T = 2π √(a³ / GM)`.
///
/// A non-positive central mass has no bound orbit; the result is `NaN` and
/// propagates through any arithmetic built on it.
pub fn orbital_period(semi_major_axis: f64, central_mass: f64) -> f64 {
    if central_mass <= 0.0 {
        return f64::NAN;
    }
    TAU * (semi_major_axis.powi(3) / (G * central_mass)).sqrt()
}

/// Mean orbital speed in m/s: `v = √(GM / a)`.
///
/// Returns `NaN` for a non-positive central mass, like [`orbital_period`].
pub fn orbital_velocity(semi_major_axis: f64, central_mass: f64) -> f64 {
    if central_mass <= 0.0 {
        return f64::NAN;
    }
    (G * central_mass / semi_major_axis).sqrt()
}

/// Mean angular rate in rad/s for the given period.
pub fn angular_rate(orbital_period: f64) -> f64 {
    TAU / orbital_period
}

/// Advance a phase angle by `dt` seconds of simulation time.
///
/// The angle is not wrapped; every consumer goes through periodic trig.
pub fn advance_angle(angle: f64, orbital_period: f64, dt: f64) -> f64 {
    angle + angular_rate(orbital_period) * dt
}

/// Radius of the conic at the given angle: `r = a(1 − e²) / (1 + e cos θ)`.
pub fn conic_radius(semi_major_axis: f64, eccentricity: f64, angle: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * angle.cos())
}

/// Position on the ellipse, in the parent-centred frame.
///
/// `angle` must already be advanced to the instant being placed; this does no
/// time integration.
pub fn position_on_ellipse(
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    angle: f64,
) -> DVec3 {
    let r = conic_radius(semi_major_axis, eccentricity, angle);
    let (sin_a, cos_a) = angle.sin_cos();
    DVec3::new(r * cos_a, r * sin_a * inclination.sin(), r * sin_a)
}

/// Sample a closed orbit line: `segments + 1` points, first and last coincide.
pub fn orbit_path(orbit: &Orbit, segments: usize) -> Vec<DVec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| orbit.position_at(i as f64 / segments as f64 * TAU))
        .collect()
}
