//! Name pools for generated bodies.

use rand::Rng;
use rand::seq::SliceRandom;

/// Planet names, drawn without repetition within one system.
pub const PLANET_NAMES: &[&str] = &[
    "Helios",
    "Apollo",
    "Ares",
    "Athena",
    "Poseidon",
    "Hades",
    "Hera",
    "Hermes",
    "Aphrodite",
    "Demeter",
];

/// Moon names, drawn without repetition within one system.
pub const MOON_NAMES: &[&str] = &[
    "Moonshade",
    "Stardust",
    "Glimmer",
    "Rime",
    "Ember",
    "Ripple",
    "Firmament",
    "Daybreak",
    "Dusk",
    "Phantom",
];

/// Catalogue prefixes for system designations.
pub const CATALOGUE_PREFIXES: &[&str] = &["NGC", "M", "UGC", "IC", "PGC"];

/// A fixed pool of names handed out without repetition.
///
/// Once every pool name is taken, further draws get a numbered synthetic name
/// (`"<fallback>-<n>"`, counting on from the pool size) that is not checked
/// for uniqueness against anything else.
#[derive(Clone, Debug)]
pub struct NamePool {
    names: &'static [&'static str],
    fallback: &'static str,
    used: Vec<&'static str>,
    overflow: usize,
}

impl NamePool {
    pub fn new(names: &'static [&'static str], fallback: &'static str) -> Self {
        Self {
            names,
            fallback,
            used: Vec::with_capacity(names.len()),
            overflow: 0,
        }
    }

    pub fn planets() -> Self {
        Self::new(PLANET_NAMES, "Planet")
    }

    pub fn moons() -> Self {
        Self::new(MOON_NAMES, "Moon")
    }

    /// Forget every name handed out so far.
    pub fn reset(&mut self) {
        self.used.clear();
        self.overflow = 0;
    }

    /// Draw uniformly among the names not yet used.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> String {
        let available: Vec<&'static str> = self
            .names
            .iter()
            .copied()
            .filter(|n| !self.used.contains(n))
            .collect();

        match available.choose(rng) {
            Some(&name) => {
                self.used.push(name);
                name.to_owned()
            }
            None => {
                self.overflow += 1;
                format!("{}-{}", self.fallback, self.used.len() + self.overflow)
            }
        }
    }

    /// Whether every pool name has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.used.len() == self.names.len()
    }

    pub fn capacity(&self) -> usize {
        self.names.len()
    }
}

/// A catalogue-style designation such as "NGC 4414".
pub fn catalogue_designation<R: Rng>(rng: &mut R) -> String {
    let prefix = CATALOGUE_PREFIXES.choose(rng).copied().unwrap_or("NGC");
    let number: u32 = rng.gen_range(1000..10000);
    format!("{prefix} {number}")
}
