//! A fixed Sol-like system, for comparing generated systems against a familiar one.
//!
//! Planet distances and masses are the real ones. Moon orbits use the same
//! scene-unit spacing as generated moons, since true moon distances would put
//! them inside their planet's display sphere.

use rand::Rng;

use crate::body::{BodyConfig, BodyError, LifeStatus, RingSystem};
use crate::orbit::Orbit;
use crate::system::StarSystem;
use crate::types::{AU_TO_METERS, EARTH_MASS, EARTH_RADIUS};

use super::{GeneratorConfig, planet_radius};

/// Designation of the preset system.
pub const SOLAR_SYSTEM_DESIGNATION: &str = "Sol";

/// Static data for one preset planet.
#[derive(Clone, Copy, Debug)]
pub struct PresetPlanet {
    pub name: &'static str,
    /// Semi-major axis in AU
    pub distance_au: f64,
    /// Mass in Earth masses
    pub mass_earths: f64,
    pub moons: usize,
    pub rings: bool,
}

impl PresetPlanet {
    const fn new(
        name: &'static str,
        distance_au: f64,
        mass_earths: f64,
        moons: usize,
        rings: bool,
    ) -> Self {
        Self {
            name,
            distance_au,
            mass_earths,
            moons,
            rings,
        }
    }
}

/// The eight planets, innermost first.
pub const SOLAR_SYSTEM: &[PresetPlanet] = &[
    PresetPlanet::new("Mercury", 0.39, 0.055, 0, false),
    PresetPlanet::new("Venus", 0.72, 0.815, 0, false),
    PresetPlanet::new("Earth", 1.0, 1.0, 1, false),
    PresetPlanet::new("Mars", 1.52, 0.107, 2, false),
    PresetPlanet::new("Jupiter", 5.2, 317.8, 4, false),
    PresetPlanet::new("Saturn", 9.5, 95.2, 3, true),
    PresetPlanet::new("Uranus", 19.2, 14.5, 2, false),
    PresetPlanet::new("Neptune", 30.0, 17.1, 1, false),
];

/// Mass of Earth's moon in Earth masses.
const LUNA_MASS_EARTHS: f64 = 0.0123;

/// Mass of every other preset moon in Earth masses.
const GENERIC_MOON_MASS_EARTHS: f64 = 0.01;

/// Build the preset system. Only the starting phases are random.
pub fn solar_system<R: Rng>(stamp: u32, rng: &mut R) -> Result<StarSystem, BodyError> {
    let config = GeneratorConfig::default();
    let mut system = StarSystem::new(stamp, SOLAR_SYSTEM_DESIGNATION, BodyConfig::star("Sun"))?;
    let star = system.star_id();

    for data in SOLAR_SYSTEM {
        let mass = data.mass_earths * EARTH_MASS;
        let radius = planet_radius(mass);
        let life_status = if data.name == "Earth" {
            LifeStatus::Confirmed
        } else {
            LifeStatus::None
        };

        let orbit = Orbit::circular(data.distance_au * AU_TO_METERS);
        let mut planet = BodyConfig::planet(data.name, orbit)
            .with_mass(mass)
            .with_radius(radius)
            .with_life_status(life_status);
        if data.rings {
            planet = planet.with_rings(RingSystem::for_planet_radius(radius));
        }
        let planet = system.spawn(planet, star, rng)?;

        for index in 0..data.moons {
            let (name, mass_earths) = if data.name == "Earth" {
                ("Moon".to_owned(), LUNA_MASS_EARTHS)
            } else {
                (format!("{}-{}", data.name, lower_roman(index + 1)), GENERIC_MOON_MASS_EARTHS)
            };
            let jitter = config.moon_orbit_jitter / 2.0;
            let semi_major_axis = super::moon_semi_major_axis(&config, index, jitter);
            let moon = BodyConfig::moon(name, Orbit::circular(semi_major_axis))
                .with_mass(mass_earths * EARTH_MASS)
                .with_radius(0.27 * EARTH_RADIUS);
            system.spawn_satellite(planet, moon, rng)?;
        }
    }

    Ok(system)
}

fn lower_roman(mut n: usize) -> String {
    const NUMERALS: &[(usize, &str)] = &[
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut out = String::new();
    for &(value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
