//! Procedural star-system generation.
//!
//! A system is built in one pass: the star, then each planet outward from
//! the star followed by its moons. Planet masses are banded by generation
//! index (inner, middle, outer thirds of the count, not by distance), orbits
//! grow geometrically, and habitability is rolled once per planet inside a
//! fixed distance and mass window.

pub mod config;
pub mod names;
pub mod presets;

#[cfg(test)]
mod proptest_generator;

use bevy::log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use config::{GeneratorConfig, GeneratorConfigError};
pub use names::NamePool;

use crate::body::{BodyConfig, BodyError, BodyId, LifeStatus, PlanetClass, RingSystem};
use crate::orbit::Orbit;
use crate::system::StarSystem;
use crate::types::{AU_TO_METERS, EARTH_MASS, EARTH_RADIUS, SOLAR_MASS, SOLAR_RADIUS, UnitScale};

/// Name given to every generated root star.
pub const STAR_NAME: &str = "Primary";

/// Mass band a planet draws from, fixed by its generation index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetZone {
    Inner,
    Middle,
    Outer,
}

impl PlanetZone {
    /// Zone of the `index`-th of `total` planets.
    pub fn for_index(index: usize, total: usize, config: &GeneratorConfig) -> Self {
        let position = index as f64;
        let total = total as f64;
        if position < total * config.inner_zone_fraction {
            PlanetZone::Inner
        } else if position < total * config.middle_zone_fraction {
            PlanetZone::Middle
        } else {
            PlanetZone::Outer
        }
    }

    /// Mass band in Earth masses.
    pub fn mass_band<'a>(&self, config: &'a GeneratorConfig) -> &'a std::ops::Range<f64> {
        match self {
            PlanetZone::Inner => &config.inner_mass,
            PlanetZone::Middle => &config.middle_mass,
            PlanetZone::Outer => &config.outer_mass,
        }
    }
}

/// Radius in meters from mass in kg, by a three-segment power law in Earth units.
pub fn planet_radius(mass: f64) -> f64 {
    let ratio = mass / EARTH_MASS;
    let exponent = if ratio < 1.0 {
        0.3
    } else if ratio < 10.0 {
        0.5
    } else {
        0.3
    };
    EARTH_RADIUS * ratio.powf(exponent)
}

/// Whether a planet at `semi_major_axis` meters with `mass` kg may host life.
///
/// Both windows are closed intervals, compared in SI units so the edges are exact.
pub fn in_habitable_window(config: &GeneratorConfig, semi_major_axis: f64, mass: f64) -> bool {
    let orbit = config.habitable_orbit_au.start() * AU_TO_METERS
        ..=config.habitable_orbit_au.end() * AU_TO_METERS;
    let masses =
        config.habitable_mass.start() * EARTH_MASS..=config.habitable_mass.end() * EARTH_MASS;
    orbit.contains(&semi_major_axis) && masses.contains(&mass)
}

/// Life status for a uniform roll in [0, 1).
pub fn life_status_for_roll(config: &GeneratorConfig, roll: f64) -> LifeStatus {
    if roll < config.confirmed_life_below {
        LifeStatus::Confirmed
    } else if roll < config.possible_life_below {
        LifeStatus::Possible
    } else {
        LifeStatus::None
    }
}

/// Roll habitability for a planet. Draws from `rng` only inside the habitable window.
pub fn determine_life_status<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
    semi_major_axis: f64,
    mass: f64,
) -> LifeStatus {
    if !in_habitable_window(config, semi_major_axis, mass) {
        return LifeStatus::None;
    }
    life_status_for_roll(config, rng.r#gen::<f64>())
}

/// Exclusive upper bound on the moon count for a planet of `mass_ratio` Earth masses.
pub fn moon_count_limit(mass_ratio: f64) -> u32 {
    if mass_ratio < 0.5 {
        1
    } else if mass_ratio < 2.0 {
        2
    } else if mass_ratio < 20.0 {
        3
    } else {
        5
    }
}

/// Draw a moon count in `[0, moon_count_limit)`. Planets that can have no moons draw nothing.
pub fn determine_moon_count<R: Rng>(rng: &mut R, mass_ratio: f64) -> u32 {
    match moon_count_limit(mass_ratio) {
        1 => 0,
        limit => rng.gen_range(0..limit),
    }
}

/// Semi-major axis in meters of the `index`-th moon, with `jitter` in scene units.
///
/// Moon spacing is chosen in scene units so sibling orbits stay visibly apart.
pub fn moon_semi_major_axis(config: &GeneratorConfig, index: usize, jitter: f64) -> f64 {
    UnitScale::scene_to_meters(
        config.moon_orbit_base + index as f64 * config.moon_orbit_step + jitter,
    )
}

/// Builds star systems from a random source.
///
/// Each call to [`generate_star_system`](Self::generate_star_system) stamps
/// the new system with a fresh generation number and starts both name pools
/// over.
#[derive(Debug)]
pub struct SystemGenerator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
    planet_names: NamePool,
    moon_names: NamePool,
    next_stamp: u32,
}

impl SystemGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SystemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
            planet_names: NamePool::planets(),
            moon_names: NamePool::moons(),
            next_stamp: 0,
        }
    }

    /// Generator with custom bands, rejected if they cannot be sampled.
    pub fn with_config(rng: R, config: GeneratorConfig) -> Result<Self, GeneratorConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(rng)
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Reserve the generation stamp for the next system built from this generator.
    pub fn next_stamp(&mut self) -> u32 {
        let stamp = self.next_stamp;
        self.next_stamp = self.next_stamp.wrapping_add(1);
        stamp
    }

    /// Build a complete system: star, planets in orbit order, and their moons.
    pub fn generate_star_system(&mut self) -> Result<StarSystem, BodyError> {
        self.planet_names.reset();
        self.moon_names.reset();

        let stamp = self.next_stamp();
        let designation = names::catalogue_designation(&mut self.rng);
        let mut system = StarSystem::new(stamp, designation, self.star_config())?;
        let star = system.star_id();

        let count = self.rng.gen_range(self.config.planet_count.clone());
        let mut semi_major_axis_au = 0.0;
        for index in 0..count {
            semi_major_axis_au = if index == 0 {
                self.rng.gen_range(self.config.first_orbit_au.clone())
            } else {
                semi_major_axis_au * self.rng.gen_range(self.config.spacing_factor.clone())
            };

            let planet_config = self.planet_config(index, count, semi_major_axis_au);
            let planet = system.spawn(planet_config, star, &mut self.rng)?;
            self.generate_moons(&mut system, planet)?;

            if let Some(body) = system.get(planet) {
                debug!(
                    "Planet {} at {:.2} AU: {:.2} M⊕, {} moons, {}",
                    body.name(),
                    semi_major_axis_au,
                    body.mass_ratio(),
                    body.satellites().len(),
                    body.life_status()
                );
            }
        }

        info!(
            "Generated {} ({}): {:.2} M☉, {} planets, {} moons",
            system.designation(),
            system.star().star_class().map_or("unknown", |c| c.name()),
            system.star().mass() / SOLAR_MASS,
            system.planet_ids().len(),
            system.moons().count()
        );
        Ok(system)
    }

    fn star_config(&mut self) -> BodyConfig {
        let variation = self.rng.gen_range(self.config.star_mass_variation.clone());
        BodyConfig::star(STAR_NAME)
            .with_mass(SOLAR_MASS * variation)
            .with_radius(SOLAR_RADIUS * variation.powf(self.config.star_radius_exponent))
    }

    fn planet_config(&mut self, index: usize, total: usize, semi_major_axis_au: f64) -> BodyConfig {
        let zone = PlanetZone::for_index(index, total, &self.config);
        let mass = EARTH_MASS * self.rng.gen_range(zone.mass_band(&self.config).clone());
        let radius = planet_radius(mass);
        let semi_major_axis = semi_major_axis_au * AU_TO_METERS;
        let eccentricity = self.rng.r#gen::<f64>() * self.config.max_eccentricity;
        let inclination = self.rng.r#gen::<f64>() * self.config.max_inclination;
        let life_status = determine_life_status(&mut self.rng, &self.config, semi_major_axis, mass);
        let name = self.draw_name(PoolKind::Planet);

        let orbit = Orbit::new(semi_major_axis, eccentricity, inclination);
        let mut config = BodyConfig::planet(name, orbit)
            .with_mass(mass)
            .with_radius(radius)
            .with_life_status(life_status);

        if PlanetClass::from_mass(mass).is_giant() && self.rng.gen_bool(self.config.ring_chance) {
            config = config.with_rings(RingSystem::for_planet_radius(radius));
        }
        config
    }

    fn generate_moons(&mut self, system: &mut StarSystem, planet: BodyId) -> Result<(), BodyError> {
        let mass_ratio = system
            .get(planet)
            .ok_or(BodyError::UnknownBody(planet))?
            .mass_ratio();
        let count = determine_moon_count(&mut self.rng, mass_ratio);

        for index in 0..count as usize {
            let name = self.draw_name(PoolKind::Moon);
            let mass = EARTH_MASS * self.rng.gen_range(self.config.moon_mass.clone());
            let radius = EARTH_RADIUS * self.rng.gen_range(self.config.moon_radius.clone());
            let jitter = self.rng.r#gen::<f64>() * self.config.moon_orbit_jitter;
            let semi_major_axis = moon_semi_major_axis(&self.config, index, jitter);
            let eccentricity = self.rng.r#gen::<f64>() * self.config.moon_max_eccentricity;

            let config = BodyConfig::moon(name, Orbit::new(semi_major_axis, eccentricity, 0.0))
                .with_mass(mass)
                .with_radius(radius);
            system.spawn_satellite(planet, config, &mut self.rng)?;
        }
        Ok(())
    }

    fn draw_name(&mut self, kind: PoolKind) -> String {
        let pool = match kind {
            PoolKind::Planet => &mut self.planet_names,
            PoolKind::Moon => &mut self.moon_names,
        };
        if pool.is_exhausted() {
            debug!("{kind:?} name pool exhausted, using a numbered name");
        }
        pool.draw(&mut self.rng)
    }
}

#[derive(Clone, Copy, Debug)]
enum PoolKind {
    Planet,
    Moon,
}
