//! Tunable bands for procedural generation.

use std::ops::{Range, RangeInclusive};

use bevy::prelude::Resource;

/// Distribution bands used by [`SystemGenerator`](super::SystemGenerator).
///
/// Masses are in Earth masses, distances in AU unless the field says
/// otherwise. `Default` gives a Sun-like star with five to eight planets.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of planets per system
    pub planet_count: RangeInclusive<usize>,
    /// Star mass as a multiple of the Sun's
    pub star_mass_variation: Range<f64>,
    /// Exponent of the stellar mass-radius relation
    pub star_radius_exponent: f64,
    /// Semi-major axis of the innermost planet (AU)
    pub first_orbit_au: Range<f64>,
    /// Ratio between consecutive semi-major axes
    pub spacing_factor: Range<f64>,
    /// Share of planets, by generation order, drawn from `inner_mass`
    pub inner_zone_fraction: f64,
    /// Cumulative share drawn from `inner_mass` or `middle_mass`
    pub middle_zone_fraction: f64,
    pub inner_mass: Range<f64>,
    pub middle_mass: Range<f64>,
    pub outer_mass: Range<f64>,
    /// Planet eccentricity is drawn from [0, max)
    pub max_eccentricity: f64,
    /// Planet inclination is drawn from [0, max) radians
    pub max_inclination: f64,
    /// Orbits (AU) where life may arise
    pub habitable_orbit_au: RangeInclusive<f64>,
    /// Masses (Earth masses) where life may arise
    pub habitable_mass: RangeInclusive<f64>,
    /// Rolls below this confirm life
    pub confirmed_life_below: f64,
    /// Rolls below this (and not confirmed) make life possible
    pub possible_life_below: f64,
    pub moon_mass: Range<f64>,
    /// Moon radius in Earth radii
    pub moon_radius: Range<f64>,
    /// Innermost moon orbit, in scene units from the planet
    pub moon_orbit_base: f64,
    /// Added per moon index, in scene units
    pub moon_orbit_step: f64,
    /// Random extra distance in [0, jitter), in scene units
    pub moon_orbit_jitter: f64,
    pub moon_max_eccentricity: f64,
    /// Probability that a giant planet carries rings
    pub ring_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            planet_count: 5..=8,
            star_mass_variation: 0.7..1.3,
            star_radius_exponent: 0.8,
            first_orbit_au: 0.3..0.5,
            spacing_factor: 1.4..2.2,
            inner_zone_fraction: 0.3,
            middle_zone_fraction: 0.7,
            inner_mass: 0.3..1.8,
            middle_mass: 0.5..10.5,
            outer_mass: 10.0..310.0,
            max_eccentricity: 0.15,
            max_inclination: 0.1,
            habitable_orbit_au: 0.8..=1.5,
            habitable_mass: 0.5..=5.0,
            confirmed_life_below: 0.3,
            possible_life_below: 0.7,
            moon_mass: 0.001..0.021,
            moon_radius: 0.1..0.3,
            moon_orbit_base: 8.0,
            moon_orbit_step: 4.0,
            moon_orbit_jitter: 4.0,
            moon_max_eccentricity: 0.05,
            ring_chance: 0.125,
        }
    }
}

/// A [`GeneratorConfig`] that would produce invalid bodies or panic while sampling.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeneratorConfigError {
    #[error("{field}: range {start}..{end} is empty")]
    EmptyRange {
        field: &'static str,
        start: f64,
        end: f64,
    },

    #[error("{field}: values must be positive and finite, range starts at {start}")]
    NotPositive { field: &'static str, start: f64 },

    #[error("{field}: {value} is outside [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("spacing factor must stay above 1 to keep orbits increasing, range starts at {0}")]
    NonIncreasingSpacing(f64),

    #[error("zone fractions must satisfy 0 <= inner <= middle <= 1, got {inner} and {middle}")]
    ZoneOrder { inner: f64, middle: f64 },

    #[error(
        "life thresholds must satisfy 0 <= confirmed <= possible <= 1, \
         got {confirmed} and {possible}"
    )]
    LifeThresholdOrder { confirmed: f64, possible: f64 },
}

impl GeneratorConfig {
    /// Check that every band can be sampled and yields valid bodies.
    pub fn validate(&self) -> Result<(), GeneratorConfigError> {
        if self.planet_count.is_empty() {
            return Err(GeneratorConfigError::EmptyRange {
                field: "planet_count",
                start: *self.planet_count.start() as f64,
                end: *self.planet_count.end() as f64,
            });
        }

        for (field, range) in [
            ("star_mass_variation", &self.star_mass_variation),
            ("first_orbit_au", &self.first_orbit_au),
            ("spacing_factor", &self.spacing_factor),
            ("inner_mass", &self.inner_mass),
            ("middle_mass", &self.middle_mass),
            ("outer_mass", &self.outer_mass),
            ("moon_mass", &self.moon_mass),
            ("moon_radius", &self.moon_radius),
        ] {
            positive_range(field, range)?;
        }

        if self.spacing_factor.start <= 1.0 {
            return Err(GeneratorConfigError::NonIncreasingSpacing(
                self.spacing_factor.start,
            ));
        }

        let (inner, middle) = (self.inner_zone_fraction, self.middle_zone_fraction);
        if !(0.0 <= inner && inner <= middle && middle <= 1.0) {
            return Err(GeneratorConfigError::ZoneOrder { inner, middle });
        }

        let (confirmed, possible) = (self.confirmed_life_below, self.possible_life_below);
        if !(0.0 <= confirmed && confirmed <= possible && possible <= 1.0) {
            return Err(GeneratorConfigError::LifeThresholdOrder { confirmed, possible });
        }

        bounded("max_eccentricity", self.max_eccentricity, 0.0, 1.0)?;
        bounded("moon_max_eccentricity", self.moon_max_eccentricity, 0.0, 1.0)?;
        bounded("max_inclination", self.max_inclination, 0.0, std::f64::consts::PI)?;
        bounded("ring_chance", self.ring_chance, 0.0, 1.0)?;

        if !(self.moon_orbit_base.is_finite() && self.moon_orbit_base > 0.0) {
            return Err(GeneratorConfigError::NotPositive {
                field: "moon_orbit_base",
                start: self.moon_orbit_base,
            });
        }
        bounded("moon_orbit_step", self.moon_orbit_step, 0.0, f64::MAX)?;
        bounded("moon_orbit_jitter", self.moon_orbit_jitter, 0.0, f64::MAX)?;

        Ok(())
    }
}

fn positive_range(field: &'static str, range: &Range<f64>) -> Result<(), GeneratorConfigError> {
    if !(range.start.is_finite() && range.end.is_finite()) || range.start >= range.end {
        return Err(GeneratorConfigError::EmptyRange {
            field,
            start: range.start,
            end: range.end,
        });
    }
    if range.start <= 0.0 {
        return Err(GeneratorConfigError::NotPositive {
            field,
            start: range.start,
        });
    }
    Ok(())
}

fn bounded(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), GeneratorConfigError> {
    // Eccentricity caps of exactly 1 are fine: draws stay below the cap.
    if !(min..=max).contains(&value) {
        return Err(GeneratorConfigError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
