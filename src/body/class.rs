//! Coarse classifications derived from a body's mass.
//!
//! These are read-only labels for presentation; nothing in the simulation
//! branches on them.

use std::fmt;

use crate::types::{EARTH_MASS, SOLAR_MASS};

/// Planet category by mass ratio to the Earth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetClass {
    /// Below half an Earth mass
    Dwarf,
    /// 0.5 – 2 M⊕
    Terrestrial,
    /// 2 – 10 M⊕
    SuperEarth,
    /// 10 – 50 M⊕
    IceGiant,
    /// Above 50 M⊕
    GasGiant,
}

impl PlanetClass {
    /// Classify by mass ratio to the Earth.
    pub fn from_mass_ratio(mass_ratio: f64) -> Self {
        if mass_ratio < 0.5 {
            PlanetClass::Dwarf
        } else if mass_ratio < 2.0 {
            PlanetClass::Terrestrial
        } else if mass_ratio < 10.0 {
            PlanetClass::SuperEarth
        } else if mass_ratio < 50.0 {
            PlanetClass::IceGiant
        } else {
            PlanetClass::GasGiant
        }
    }

    /// Classify by mass in kg.
    pub fn from_mass(mass: f64) -> Self {
        Self::from_mass_ratio(mass / EARTH_MASS)
    }

    /// Whether this class is one of the giant planets.
    pub fn is_giant(&self) -> bool {
        matches!(self, PlanetClass::IceGiant | PlanetClass::GasGiant)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetClass::Dwarf => "Small rocky planet",
            PlanetClass::Terrestrial => "Terrestrial planet",
            PlanetClass::SuperEarth => "Super-Earth",
            PlanetClass::IceGiant => "Ice giant",
            PlanetClass::GasGiant => "Gas giant",
        }
    }
}

impl fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stellar category by mass, with a representative surface temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StarClass {
    RedDwarf,
    OrangeDwarf,
    YellowDwarf,
    YellowWhite,
    White,
    BlueWhite,
    BlueGiant,
}

impl StarClass {
    /// Classify by mass in solar masses. Upper band edges are exclusive.
    pub fn from_solar_masses(solar_masses: f64) -> Self {
        if solar_masses < 0.5 {
            StarClass::RedDwarf
        } else if solar_masses < 0.8 {
            StarClass::OrangeDwarf
        } else if solar_masses < 1.2 {
            StarClass::YellowDwarf
        } else if solar_masses < 1.5 {
            StarClass::YellowWhite
        } else if solar_masses < 2.5 {
            StarClass::White
        } else if solar_masses < 10.0 {
            StarClass::BlueWhite
        } else {
            StarClass::BlueGiant
        }
    }

    /// Classify by mass in kg.
    pub fn from_mass(mass: f64) -> Self {
        Self::from_solar_masses(mass / SOLAR_MASS)
    }

    /// Representative effective temperature in kelvin.
    pub fn temperature(&self) -> f64 {
        match self {
            StarClass::RedDwarf => 3000.0,
            StarClass::OrangeDwarf => 4000.0,
            StarClass::YellowDwarf => 5500.0,
            StarClass::YellowWhite => 7000.0,
            StarClass::White => 10000.0,
            StarClass::BlueWhite => 20000.0,
            StarClass::BlueGiant => 30000.0,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            StarClass::RedDwarf => "Red dwarf",
            StarClass::OrangeDwarf => "Orange dwarf",
            StarClass::YellowDwarf => "Yellow dwarf",
            StarClass::YellowWhite => "Yellow-white star",
            StarClass::White => "White star",
            StarClass::BlueWhite => "Blue-white star",
            StarClass::BlueGiant => "Blue giant",
        }
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palette hint for planet and moon surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceTone {
    Rocky,
    Earthlike,
    Icy,
    Gaseous,
}

impl SurfaceTone {
    /// Pick a tone from mass ratio and whether life has been confirmed.
    pub fn for_body(mass_ratio: f64, life_confirmed: bool) -> Self {
        if life_confirmed {
            SurfaceTone::Earthlike
        } else if mass_ratio < 2.0 {
            SurfaceTone::Rocky
        } else if mass_ratio < 50.0 {
            SurfaceTone::Earthlike
        } else if mass_ratio < 100.0 {
            SurfaceTone::Icy
        } else {
            SurfaceTone::Gaseous
        }
    }

    /// Linear RGB base colour.
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            SurfaceTone::Rocky => [0.6, 0.4, 0.3],
            SurfaceTone::Earthlike => [0.2, 0.5, 0.3],
            SurfaceTone::Icy => [0.7, 0.8, 0.9],
            SurfaceTone::Gaseous => [0.8, 0.6, 0.4],
        }
    }
}
