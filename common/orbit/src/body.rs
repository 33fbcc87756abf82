//! Static body parameters and per-body runtime state.

use bevy_color::{Color, Srgba};
use bevy_math::Vec3;
use std::fmt;
use std::ops::RangeInclusive;

/// Range a speed control may take, in radians per frame.
pub const SPEED_RANGE: RangeInclusive<f32> = 0.001..=0.1;
/// Granularity of a speed control.
pub const SPEED_STEP: f32 = 0.001;

/// Position on the orbital plane for a phase `angle` at `distance` from the center.
///
/// All orbits are coplanar, so the result always has `y == 0`.
#[inline(always)]
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * distance, 0.0, s * distance)
}

/// Convert a packed `0xRRGGBB` value into a [`Color`].
#[inline]
pub fn hex_color(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::Srgba(Srgba::rgb_u8(r, g, b))
}

/// Static parameters of an orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    /// Display name, unique within a system
    pub name: &'static str,
    /// Radius of the rendered sphere
    pub radius: f32,
    /// Radius of the orbit
    pub distance: f32,
    /// Initial angular speed, in radians per frame
    pub speed: f32,
    /// Packed sRGB color, `0xRRGGBB`
    pub color: u32,
}
impl BodyParams {
    pub const MERCURY: Self = Self::new("Mercury", 0.5, 6.0, 0.04, 0xaaaaaa);
    pub const VENUS: Self = Self::new("Venus", 0.6, 8.0, 0.02, 0xffcc66);
    pub const EARTH: Self = Self::new("Earth", 0.7, 10.0, 0.01, 0x2233ff);
    pub const MARS: Self = Self::new("Mars", 0.6, 12.0, 0.008, 0xff3300);
    pub const JUPITER: Self = Self::new("Jupiter", 1.2, 16.0, 0.005, 0xff9966);
    pub const SATURN: Self = Self::new("Saturn", 1.1, 20.0, 0.003, 0xffcc99);
    pub const URANUS: Self = Self::new("Uranus", 0.9, 24.0, 0.002, 0x66ffff);
    pub const NEPTUNE: Self = Self::new("Neptune", 0.9, 28.0, 0.001, 0x3333ff);

    pub const fn new(
        name: &'static str,
        radius: f32,
        distance: f32,
        speed: f32,
        color: u32,
    ) -> Self {
        Self {
            name,
            radius,
            distance,
            speed,
            color,
        }
    }
    #[inline]
    pub fn color(&self) -> Color {
        hex_color(self.color)
    }
}

/// The orbiting bodies, in creation and display order.
pub const PLANETS: [BodyParams; 8] = [
    BodyParams::MERCURY,
    BodyParams::VENUS,
    BodyParams::EARTH,
    BodyParams::MARS,
    BodyParams::JUPITER,
    BodyParams::SATURN,
    BodyParams::URANUS,
    BodyParams::NEPTUNE,
];

/// Parameters of the central, non-orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    pub radius: f32,
    pub color: u32,
}
impl StarParams {
    #[inline]
    pub fn color(&self) -> Color {
        hex_color(self.color)
    }
}

pub const SUN: StarParams = StarParams {
    radius: 3.0,
    color: 0xfdb813,
};

/// Stable identifier of a body within an [`OrbitModel`](crate::model::OrbitModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u8);
impl BodyId {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Orbital phase, in radians. Never normalized.
    pub angle: f32,
    /// Angular speed, in radians per frame.
    pub speed: f32,
}
impl BodyState {
    #[inline(always)]
    pub fn position(&self, distance: f32) -> Vec3 {
        orbit_position(self.angle, distance)
    }
    /// Advance by one frame.
    #[inline(always)]
    pub fn step(&mut self) {
        self.angle += self.speed;
    }
}

/// A body: its static parameters together with its runtime state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub params: BodyParams,
    pub state: BodyState,
}
impl Body {
    pub fn new(params: BodyParams, angle: f32) -> Self {
        Self {
            params,
            state: BodyState {
                angle,
                speed: params.speed,
            },
        }
    }
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.state.position(self.params.distance)
    }
}
