//! Celestial body records: the star, its planets, and their moons.
//!
//! A single record type tagged by [`BodyKind`] covers all three; they differ
//! only in defaults and in whether the position is offset by the parent's.
//! Parent and satellite links are [`BodyId`] handles into the owning
//! [`StarSystem`](crate::system::StarSystem), never owning pointers.

pub mod class;

use std::fmt;

use bevy::math::{DVec3, Vec3};

pub use class::{PlanetClass, StarClass, SurfaceTone};

use crate::orbit::{self, Orbit};
use crate::types::{
    EARTH_MASS, EARTH_RADIUS, LUNAR_MASS, LUNAR_RADIUS, SOLAR_MASS, SOLAR_RADIUS, UnitScale,
};

/// Handle to a body inside a [`StarSystem`](crate::system::StarSystem).
///
/// `system` is the registry's generation stamp, so a handle kept across a
/// regenerate never resolves to a body of the new system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId {
    system: u32,
    index: u32,
}

impl BodyId {
    pub(crate) fn new(system: u32, index: usize) -> Self {
        Self {
            system,
            index: index as u32,
        }
    }

    /// Generation stamp of the system this body belongs to.
    pub fn system(&self) -> u32 {
        self.system
    }

    /// Slot of the body in its system's registry.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.system, self.index)
    }
}

/// What a body is, which fixes where it may sit in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

impl BodyKind {
    /// Mass used when a config leaves it unset.
    pub fn default_mass(&self) -> f64 {
        match self {
            BodyKind::Star => SOLAR_MASS,
            BodyKind::Planet => EARTH_MASS,
            BodyKind::Moon => LUNAR_MASS,
        }
    }

    /// Radius used when a config leaves it unset.
    pub fn default_radius(&self) -> f64 {
        match self {
            BodyKind::Star => SOLAR_RADIUS,
            BodyKind::Planet => EARTH_RADIUS,
            BodyKind::Moon => LUNAR_RADIUS,
        }
    }

    /// The kind a parent of this kind must have, if any.
    pub fn parent_kind(&self) -> Option<BodyKind> {
        match self {
            BodyKind::Star => None,
            BodyKind::Planet => Some(BodyKind::Star),
            BodyKind::Moon => Some(BodyKind::Planet),
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Moon => "Moon",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the habitability roll. Only meaningful for planets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifeStatus {
    Confirmed,
    Possible,
    #[default]
    None,
}

impl LifeStatus {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            LifeStatus::Confirmed => "Life confirmed",
            LifeStatus::Possible => "Life possible",
            LifeStatus::None => "No signs of life",
        }
    }
}

impl fmt::Display for LifeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A planetary ring system, as inner and outer radius in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSystem {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl RingSystem {
    /// Rings spanning 1.4 to 2.8 planetary radii.
    pub fn for_planet_radius(radius: f64) -> Self {
        Self {
            inner_radius: radius * 1.4,
            outer_radius: radius * 2.8,
        }
    }
}

/// Errors raised when a body configuration cannot form a valid orbit hierarchy.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("{name}: mass must be positive and finite, got {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("{name}: radius must be positive and finite, got {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("{name}: semi-major axis must be positive and finite, got {semi_major_axis}")]
    InvalidSemiMajorAxis { name: String, semi_major_axis: f64 },

    #[error("{name}: eccentricity must be in [0, 1), got {eccentricity}")]
    InvalidEccentricity { name: String, eccentricity: f64 },

    #[error("{name}: inclination must be finite, got {inclination}")]
    InvalidInclination { name: String, inclination: f64 },

    #[error("{name}: orbital elements given for a body without a parent")]
    OrbitWithoutParent { name: String },

    #[error("{name}: an orbiting body needs orbital elements")]
    MissingOrbit { name: String },

    #[error("unknown body {0}")]
    UnknownBody(BodyId),

    #[error("body {0} cannot orbit itself")]
    SelfOrbit(BodyId),
}

/// Input to body creation. Unset mass and radius fall back to the kind's defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub kind: BodyKind,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub orbit: Option<Orbit>,
    pub life_status: LifeStatus,
    pub rings: Option<RingSystem>,
    /// Starting phase in radians; drawn uniformly from [0, 2π) when unset.
    pub initial_angle: Option<f64>,
}

impl BodyConfig {
    pub fn new(name: impl Into<String>, kind: BodyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mass: None,
            radius: None,
            orbit: None,
            life_status: LifeStatus::None,
            rings: None,
            initial_angle: None,
        }
    }

    pub fn star(name: impl Into<String>) -> Self {
        Self::new(name, BodyKind::Star)
    }

    pub fn planet(name: impl Into<String>, orbit: Orbit) -> Self {
        Self::new(name, BodyKind::Planet).with_orbit(orbit)
    }

    pub fn moon(name: impl Into<String>, orbit: Orbit) -> Self {
        Self::new(name, BodyKind::Moon).with_orbit(orbit)
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_life_status(mut self, life_status: LifeStatus) -> Self {
        self.life_status = life_status;
        self
    }

    pub fn with_rings(mut self, rings: RingSystem) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = Some(angle);
        self
    }

    /// Mass after defaulting.
    pub fn resolved_mass(&self) -> f64 {
        self.mass.unwrap_or_else(|| self.kind.default_mass())
    }

    /// Radius after defaulting.
    pub fn resolved_radius(&self) -> f64 {
        self.radius.unwrap_or_else(|| self.kind.default_radius())
    }

    /// Check the physical values and that orbit presence matches parent presence.
    pub fn validate(&self, has_parent: bool) -> Result<(), BodyError> {
        let name = || self.name.clone();

        let mass = self.resolved_mass();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::InvalidMass { name: name(), mass });
        }

        let radius = self.resolved_radius();
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius { name: name(), radius });
        }

        match (&self.orbit, has_parent) {
            (None, false) => Ok(()),
            (None, true) => Err(BodyError::MissingOrbit { name: name() }),
            (Some(_), false) => Err(BodyError::OrbitWithoutParent { name: name() }),
            (Some(orbit), true) => {
                let a = orbit.semi_major_axis;
                if !(a.is_finite() && a > 0.0) {
                    return Err(BodyError::InvalidSemiMajorAxis {
                        name: name(),
                        semi_major_axis: a,
                    });
                }
                let e = orbit.eccentricity;
                if !(0.0..1.0).contains(&e) {
                    return Err(BodyError::InvalidEccentricity {
                        name: name(),
                        eccentricity: e,
                    });
                }
                if !orbit.inclination.is_finite() {
                    return Err(BodyError::InvalidInclination {
                        name: name(),
                        inclination: orbit.inclination,
                    });
                }
                Ok(())
            }
        }
    }
}

/// A star, planet, or moon, with its current computed position.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    id: BodyId,
    name: String,
    kind: BodyKind,
    /// Mass in kg
    mass: f64,
    /// Radius in meters
    radius: f64,
    orbit: Option<Orbit>,
    parent: Option<BodyId>,
    life_status: LifeStatus,
    rings: Option<RingSystem>,
    /// Orbital phase in radians, unbounded
    angle: f64,
    /// Seconds per revolution; 0 for the root star
    orbital_period: f64,
    /// Mean orbital speed in m/s; 0 for the root star
    orbital_velocity: f64,
    satellites: Vec<BodyId>,
    /// Position in meters, relative to the star
    position: DVec3,
}

impl CelestialBody {
    /// Build a body, computing its period, speed, and starting position when it orbits `parent`.
    ///
    /// `parent` must be the body `config` orbits, already placed.
    pub(crate) fn new(
        id: BodyId,
        config: BodyConfig,
        parent: Option<&CelestialBody>,
        angle: f64,
    ) -> Result<Self, BodyError> {
        config.validate(parent.is_some())?;

        let mut body = Self {
            id,
            mass: config.resolved_mass(),
            radius: config.resolved_radius(),
            name: config.name,
            kind: config.kind,
            orbit: config.orbit,
            parent: parent.map(|p| p.id),
            life_status: config.life_status,
            rings: config.rings,
            angle,
            orbital_period: 0.0,
            orbital_velocity: 0.0,
            satellites: Vec::new(),
            position: DVec3::ZERO,
        };

        if let Some(parent) = parent {
            body.bind_to(parent);
        }

        Ok(body)
    }

    /// Recompute period and speed against `parent`, and re-place the body around it.
    pub(crate) fn bind_to(&mut self, parent: &CelestialBody) {
        self.parent = Some(parent.id);
        if let Some(orbit) = self.orbit {
            self.orbital_period = orbit::orbital_period(orbit.semi_major_axis, parent.mass);
            self.orbital_velocity = orbit::orbital_velocity(orbit.semi_major_axis, parent.mass);
        }
        self.place(parent.position);
    }

    pub(crate) fn push_satellite(&mut self, child: BodyId) {
        self.satellites.push(child);
    }

    pub(crate) fn remove_satellite(&mut self, child: BodyId) {
        self.satellites.retain(|&s| s != child);
    }

    /// Advance the orbital phase by `dt` seconds and recompute the position.
    ///
    /// `parent_position` must already reflect this tick. The root star stays put.
    pub(crate) fn advance(&mut self, dt: f64, parent_position: DVec3) {
        if self.orbit.is_none() {
            return;
        }
        self.angle = orbit::advance_angle(self.angle, self.orbital_period, dt);
        self.place(parent_position);
    }

    fn place(&mut self, parent_position: DVec3) {
        let Some(orbit) = self.orbit else {
            self.position = DVec3::ZERO;
            return;
        };
        let offset = orbit.position_at(self.angle);
        self.position = match self.kind {
            BodyKind::Moon => parent_position + offset,
            _ => offset,
        };
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    pub fn life_status(&self) -> LifeStatus {
        self.life_status
    }

    pub fn rings(&self) -> Option<&RingSystem> {
        self.rings.as_ref()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    pub fn orbital_velocity(&self) -> f64 {
        self.orbital_velocity
    }

    pub fn satellites(&self) -> &[BodyId] {
        &self.satellites
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Position in render units.
    pub fn scene_position(&self) -> Vec3 {
        UnitScale::to_scene(self.position)
    }

    /// Mass as a multiple of the Earth's.
    pub fn mass_ratio(&self) -> f64 {
        self.mass / EARTH_MASS
    }

    /// Planet category; `None` for stars and moons.
    pub fn planet_class(&self) -> Option<PlanetClass> {
        (self.kind == BodyKind::Planet).then(|| PlanetClass::from_mass(self.mass))
    }

    /// Stellar category; `None` for planets and moons.
    pub fn star_class(&self) -> Option<StarClass> {
        (self.kind == BodyKind::Star).then(|| StarClass::from_mass(self.mass))
    }

    /// Palette hint for rendering; `None` for stars.
    pub fn surface_tone(&self) -> Option<SurfaceTone> {
        (self.kind != BodyKind::Star).then(|| {
            SurfaceTone::for_body(self.mass_ratio(), self.life_status == LifeStatus::Confirmed)
        })
    }

    /// Sphere radius to draw, in scene units.
    ///
    /// Bodies are not drawn to scale: the star has a fixed size, planets and
    /// moons are placed inside their bands by mass (saturating at 300 M⊕ and
    /// 0.02 M⊕ respectively).
    pub fn display_radius(&self) -> f32 {
        let ratio = self.mass_ratio() as f32;
        match self.kind {
            BodyKind::Star => UnitScale::STAR_RADIUS,
            BodyKind::Planet => {
                UnitScale::PLANET_RADIUS_MIN
                    + (UnitScale::PLANET_RADIUS_MAX - UnitScale::PLANET_RADIUS_MIN)
                        * (ratio / 300.0).min(1.0)
            }
            BodyKind::Moon => {
                UnitScale::MOON_RADIUS_MIN
                    + (UnitScale::MOON_RADIUS_MAX - UnitScale::MOON_RADIUS_MIN)
                        * (ratio / 0.02).min(1.0)
            }
        }
    }

    /// Flattened snapshot for presentation. Satellite names are resolved by the caller.
    pub(crate) fn info(&self, satellite_names: Vec<String>) -> BodyInfo {
        BodyInfo {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            mass: self.mass,
            radius: self.radius,
            orbit: self.orbit,
            orbital_period: self.orbital_period,
            orbital_velocity: self.orbital_velocity,
            life_status: self.life_status,
            planet_class: self.planet_class(),
            star_class: self.star_class(),
            has_rings: self.rings.is_some(),
            satellites: satellite_names,
        }
    }
}

/// Read-only snapshot of a body, as handed to info panels.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyInfo {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub mass: f64,
    pub radius: f64,
    pub orbit: Option<Orbit>,
    pub orbital_period: f64,
    pub orbital_velocity: f64,
    pub life_status: LifeStatus,
    pub planet_class: Option<PlanetClass>,
    pub star_class: Option<StarClass>,
    pub has_rings: bool,
    pub satellites: Vec<String>,
}
