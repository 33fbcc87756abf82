//! Per-frame animation and viewport tracking.

use crate::scene::Orbiter;
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use bevy_gui::window::WindowResized;
use orrery_orbit::prelude::*;

/// Size of the surface the scene is rendered to, in logical pixels.
///
/// This is a record for observers. The window backend resizes the real surface (on the web, through
/// `fit_canvas_to_parent`), and this resource only tracks the size the camera was last fitted to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Resource)]
pub struct RenderSurface {
    pub width: f32,
    pub height: f32,
}

/// Run condition: true unless the orbits are paused.
pub fn orbits_running(playback: Res<PlaybackController>) -> bool {
    !playback.is_paused()
}

pub fn advance_orbits(mut model: ResMut<OrbitModel>) {
    model.advance();
}

/// Copy every body's position from the model onto its sphere.
pub fn sync_orbiters(model: Res<OrbitModel>, mut query: Query<(&Orbiter, &mut Transform)>) {
    for (orbiter, mut transform) in &mut query {
        if let Some(pos) = model.position(orbiter.0) {
            transform.translation = pos;
        }
    }
}

/// Keep the camera's aspect ratio and the render surface in line with the window.
///
/// Zero-sized windows (e.g. minimized ones) are skipped, leaving the last good size in place.
pub fn react_to_resize(
    mut resized: EventReader<WindowResized>,
    mut surface: ResMut<RenderSurface>,
    mut cameras: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(last) = resized
        .read()
        .filter(|e| e.width > 0.0 && e.height > 0.0)
        .last()
    else {
        return;
    };
    surface.width = last.width;
    surface.height = last.height;
    for mut proj in &mut cameras {
        if let Projection::Perspective(p) = &mut *proj {
            p.aspect_ratio = last.width / last.height;
        }
    }
    debug!(width = last.width, height = last.height, "viewport resized");
}
