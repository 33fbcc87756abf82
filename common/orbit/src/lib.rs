//! Orbit model for the orrery.
//!
//! This crate holds everything about the system that doesn't depend on a renderer: the fixed body table, each
//! body's phase and speed, the pause state, and the frame scheduler.

pub mod body;
pub mod model;
pub mod playback;
pub mod schedule;

pub mod prelude {
    pub use crate::body::{
        Body, BodyId, BodyParams, BodyState, PLANETS, SPEED_RANGE, SPEED_STEP, SUN, StarParams,
        orbit_position,
    };
    pub use crate::model::{OrbitModel, SpeedError};
    pub use crate::playback::{Playback, PlaybackController};
    pub use crate::schedule::{CancellationToken, RepeatingTask};
}
