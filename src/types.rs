//! Physical constants and the unit scale shared by the generator and renderers.
//!
//! All simulation quantities are SI (meters, kilograms, seconds). Renderers map
//! them to scene units through [`UnitScale`].

use bevy::math::{DVec3, Vec3};

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.674e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.496e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Mass of the Sun in kg
pub const SOLAR_MASS: f64 = 1.989e30;

/// Radius of the Sun in meters
pub const SOLAR_RADIUS: f64 = 6.96e8;

/// Mass of the Earth in kg
pub const EARTH_MASS: f64 = 5.972e24;

/// Radius of the Earth in meters
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Mass of the Moon in kg
pub const LUNAR_MASS: f64 = 7.342e22;

/// Radius of the Moon in meters
pub const LUNAR_RADIUS: f64 = 1.7374e6;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds per Julian year (365.25 days)
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Mapping from physical units to scene units.
///
/// The scene is laid out so that one AU spans [`UnitScale::SCENE_UNITS_PER_AU`]
/// units. Body sizes are not to scale: a star would otherwise be invisible next
/// to its orbit, so display radii come from fixed bands instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitScale;

impl UnitScale {
    /// Scene units per astronomical unit.
    pub const SCENE_UNITS_PER_AU: f64 = 50.0;

    /// Scene units per meter.
    pub const DISTANCE: f64 = Self::SCENE_UNITS_PER_AU / AU_TO_METERS;

    /// Display radius of the star, in scene units.
    pub const STAR_RADIUS: f32 = 10.0;

    /// Display radius band for planets, in scene units.
    pub const PLANET_RADIUS_MIN: f32 = 1.5;
    pub const PLANET_RADIUS_MAX: f32 = 5.0;

    /// Display radius band for moons, in scene units.
    pub const MOON_RADIUS_MIN: f32 = 0.3;
    pub const MOON_RADIUS_MAX: f32 = 0.8;

    /// Convert a distance in meters to scene units.
    pub fn meters_to_scene(meters: f64) -> f64 {
        meters * Self::DISTANCE
    }

    /// Convert a distance in scene units to meters.
    pub fn scene_to_meters(units: f64) -> f64 {
        units / Self::DISTANCE
    }

    /// Convert a physical position (meters) to a render-space position.
    ///
    /// This is the only place the simulation narrows to f32.
    pub fn to_scene(position: DVec3) -> Vec3 {
        (position * Self::DISTANCE).as_vec3()
    }
}
