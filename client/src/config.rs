use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;

/// Fixed parameters of the scene that aren't part of the orbit model.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct SceneConfig {
    /// Vertical field of view, in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance of the camera from the origin, along +Z
    pub camera_distance: f32,
    pub light_color: Color,
    /// Intensity of the point light at the center, in lumens
    pub light_intensity: f32,
    /// Distance past which the point light has no effect
    pub light_range: f32,
    pub ambient_brightness: f32,
    pub clear_color: Color,
    /// UV sphere resolution, as `(sectors, stacks)`
    pub sphere_resolution: (u32, u32),
    /// Viewport size used when there's no window, e.g. when running headless
    pub fallback_viewport: Vec2,
}
impl SceneConfig {
    pub const DEFAULT: Self = Self {
        fov_degrees: 75.0,
        near: 0.1,
        far: 1000.0,
        camera_distance: 50.0,
        light_color: Color::WHITE,
        light_intensity: 10_000_000.0,
        light_range: 300.0,
        ambient_brightness: 50.0,
        clear_color: Color::BLACK,
        sphere_resolution: (32, 32),
        fallback_viewport: Vec2::new(1280.0, 720.0),
    };

    /// A perspective projection for a viewport of the given size.
    pub fn projection(&self, viewport: Vec2) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.fov_degrees.to_radians(),
            aspect_ratio: viewport.x / viewport.y,
            near: self.near,
            far: self.far,
        }
    }
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
