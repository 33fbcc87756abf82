use crate::body::*;
use bevy_math::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Error returned when a speed write is rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SpeedError {
    #[error("speed must be a finite number, got {0}")]
    NotFinite(f32),
    #[error("no body with id {0}")]
    UnknownBody(BodyId),
}

/// Runtime state of every orbiting body.
///
/// Bodies are created once, in the order of [`PLANETS`], and are never added or removed. A [`BodyId`] is the
/// index of a body in that order, so it stays valid for the lifetime of the model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ecs", derive(bevy_ecs_macros::Resource))]
pub struct OrbitModel {
    bodies: Vec<Body>,
}
impl OrbitModel {
    /// Create a model with every body at an independent, uniformly random phase in `[0, 2π)`.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            bodies: PLANETS
                .iter()
                .map(|&p| Body::new(p, rng.gen_range(0.0..TAU)))
                .collect(),
        }
    }
    /// Same as [`Self::new`], seeded from the thread-local generator.
    pub fn random() -> Self {
        Self::new(&mut rand::thread_rng())
    }
    /// Create a model with fixed initial phases.
    pub fn with_angles(angles: [f32; PLANETS.len()]) -> Self {
        Self {
            bodies: PLANETS
                .iter()
                .zip(angles)
                .map(|(&p, a)| Body::new(p, a))
                .collect(),
        }
    }

    #[expect(
        clippy::len_without_is_empty,
        reason = "a model always holds every planet"
    )]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    #[inline]
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }
    #[inline]
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }
    /// Look a body up by its display name.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.params.name == name)
            .map(|i| BodyId(i as u8))
    }
    pub fn ids(&self) -> impl ExactSizeIterator<Item = BodyId> + use<> {
        (0..self.bodies.len() as u8).map(BodyId)
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u8), b))
    }
    #[inline]
    pub fn position(&self, id: BodyId) -> Option<Vec3> {
        self.get(id).map(Body::position)
    }

    /// Advance every body by one frame.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            body.state.step();
        }
    }

    /// Overwrite the speed of a single body.
    ///
    /// Finite values are stored as-is, even outside of [`SPEED_RANGE`]. Non-finite values are rejected and the
    /// previous speed is kept.
    pub fn set_speed(&mut self, id: BodyId, speed: f32) -> Result<(), SpeedError> {
        if !speed.is_finite() {
            return Err(SpeedError::NotFinite(speed));
        }
        let body = self.get_mut(id).ok_or(SpeedError::UnknownBody(id))?;
        body.state.speed = speed;
        Ok(())
    }
}
