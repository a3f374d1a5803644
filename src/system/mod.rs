//! Registry owning every body of one star system.
//!
//! Bodies live in a flat `Vec` in creation order and refer to each other by
//! [`BodyId`]. Exactly one root star exists per system; planets orbit it and
//! moons orbit planets.

#[cfg(test)]
mod proptest_system;

use std::iter;

use bevy::math::DVec3;
use rand::Rng;

use crate::body::{BodyConfig, BodyError, BodyId, BodyInfo, BodyKind, CelestialBody};

/// A star with its planets and moons.
#[derive(Clone, Debug)]
pub struct StarSystem {
    stamp: u32,
    designation: String,
    bodies: Vec<CelestialBody>,
    star: BodyId,
    planets: Vec<BodyId>,
}

impl StarSystem {
    /// Start a system around a root star.
    ///
    /// `stamp` tags every [`BodyId`] of this system; use a fresh value per
    /// generation so ids from a discarded system never resolve here.
    ///
    /// # Panics
    /// Panics if `star.kind` is not [`BodyKind::Star`].
    pub fn new(
        stamp: u32,
        designation: impl Into<String>,
        star: BodyConfig,
    ) -> Result<Self, BodyError> {
        assert_eq!(star.kind, BodyKind::Star, "root body must be a star");
        let id = BodyId::new(stamp, 0);
        let angle = star.initial_angle.unwrap_or(0.0);
        let star = CelestialBody::new(id, star, None, angle)?;
        Ok(Self {
            stamp,
            designation: designation.into(),
            bodies: vec![star],
            star: id,
            planets: Vec::new(),
        })
    }

    /// Create a body orbiting `parent`.
    ///
    /// Planets are registered with the star immediately. Moons keep `parent`
    /// as their reference frame but are only advanced once attached with
    /// [`StarSystem::attach_satellite`].
    ///
    /// # Panics
    /// Panics if the kinds do not form star → planet → moon.
    pub fn spawn<R: Rng>(
        &mut self,
        config: BodyConfig,
        parent: BodyId,
        rng: &mut R,
    ) -> Result<BodyId, BodyError> {
        let parent_body = self.get(parent).ok_or(BodyError::UnknownBody(parent))?;
        assert_eq!(
            Some(parent_body.kind()),
            config.kind.parent_kind(),
            "{} {} cannot orbit {} {}",
            config.kind,
            config.name,
            parent_body.kind(),
            parent_body.name()
        );

        let id = BodyId::new(self.stamp, self.bodies.len());
        let angle = match config.initial_angle {
            Some(angle) => angle,
            None => rng.gen_range(0.0..std::f64::consts::TAU),
        };
        let kind = config.kind;
        let body = CelestialBody::new(id, config, Some(parent_body), angle)?;
        self.bodies.push(body);

        if kind == BodyKind::Planet {
            self.planets.push(id);
        }
        Ok(id)
    }

    /// Append `child` to `parent`'s satellites and rebind its orbit to `parent`.
    ///
    /// Period and speed are recomputed against the new parent's mass, and the
    /// child is detached from any previous parent's satellite list.
    ///
    /// # Panics
    /// Panics if `child` is not a moon or `parent` is not a planet.
    pub fn attach_satellite(&mut self, parent: BodyId, child: BodyId) -> Result<(), BodyError> {
        if parent == child {
            return Err(BodyError::SelfOrbit(child));
        }
        let parent_body = self.get(parent).ok_or(BodyError::UnknownBody(parent))?.clone();
        let child_body = self.get(child).ok_or(BodyError::UnknownBody(child))?;
        assert_eq!(child_body.kind(), BodyKind::Moon, "only moons are attached as satellites");
        assert_eq!(parent_body.kind(), BodyKind::Planet, "satellites orbit planets");

        if let Some(previous) = child_body.parent() {
            self.bodies[previous.index()].remove_satellite(child);
        }
        self.bodies[parent.index()].push_satellite(child);
        self.bodies[child.index()].bind_to(&parent_body);
        Ok(())
    }

    /// Create a moon and attach it to `planet` in one step.
    pub fn spawn_satellite<R: Rng>(
        &mut self,
        planet: BodyId,
        config: BodyConfig,
        rng: &mut R,
    ) -> Result<BodyId, BodyError> {
        let moon = self.spawn(config, planet, rng)?;
        self.attach_satellite(planet, moon)?;
        Ok(moon)
    }

    /// Advance one body by `dt` seconds against its parent's current position.
    ///
    /// The parent must already have been advanced this tick.
    pub fn advance_body(&mut self, id: BodyId, dt: f64) {
        let Some(body) = self.get(id) else {
            return;
        };
        let parent_position = body
            .parent()
            .and_then(|p| self.get(p))
            .map(CelestialBody::position)
            .unwrap_or(DVec3::ZERO);
        self.bodies[id.index()].advance(dt, parent_position);
    }

    /// Advance every body by `dt` seconds, parents before children.
    pub fn advance_all(&mut self, dt: f64) {
        let order: Vec<BodyId> = self.tick_order().collect();
        for id in order {
            self.advance_body(id, dt);
        }
    }

    /// Star, then each planet in orbit order followed by its moons.
    ///
    /// Every body appears after its parent.
    pub fn tick_order(&self) -> impl Iterator<Item = BodyId> + '_ {
        iter::once(self.star).chain(self.planets.iter().flat_map(move |&planet| {
            iter::once(planet).chain(self.bodies[planet.index()].satellites().iter().copied())
        }))
    }

    /// Star, all planets in orbit order, then each planet's moons in attachment order.
    pub fn all_bodies(&self) -> Vec<BodyId> {
        iter::once(self.star)
            .chain(self.planets.iter().copied())
            .chain(self.moon_ids())
            .collect()
    }

    fn moon_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.planets
            .iter()
            .flat_map(move |&planet| self.bodies[planet.index()].satellites().iter().copied())
    }

    /// Look up a body; ids from other systems resolve to `None`.
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        if id.system() != self.stamp {
            return None;
        }
        self.bodies.get(id.index())
    }

    /// First body with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// Flattened snapshot of a body for presentation.
    pub fn describe(&self, id: BodyId) -> Option<BodyInfo> {
        let body = self.get(id)?;
        let satellites = body
            .satellites()
            .iter()
            .filter_map(|&s| self.get(s))
            .map(|s| s.name().to_owned())
            .collect();
        Some(body.info(satellites))
    }

    pub fn star_id(&self) -> BodyId {
        self.star
    }

    pub fn star(&self) -> &CelestialBody {
        &self.bodies[self.star.index()]
    }

    pub fn planet_ids(&self) -> &[BodyId] {
        &self.planets
    }

    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> + '_ {
        self.planets.iter().map(move |&p| &self.bodies[p.index()])
    }

    pub fn moons(&self) -> impl Iterator<Item = &CelestialBody> + '_ {
        self.moon_ids().map(move |m| &self.bodies[m.index()])
    }

    /// Every body in creation order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Generation stamp carried by every id of this system.
    pub fn stamp(&self) -> u32 {
        self.stamp
    }

    /// Catalogue designation, e.g. "NGC 4414".
    pub fn designation(&self) -> &str {
        &self.designation
    }
}
