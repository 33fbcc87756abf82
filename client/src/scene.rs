//! One-shot construction of the scene graph.

use crate::config::SceneConfig;
use crate::controls::{ControlPanel, SpeedSlider};
use crate::driver::RenderSurface;
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use bevy_gui::window::PrimaryWindow;
use orrery_orbit::prelude::*;

/// The central body. It's never moved.
#[derive(Debug, Clone, Copy, Component)]
pub struct Sun;

/// The light at the center of the system.
#[derive(Debug, Clone, Copy, Component)]
pub struct SunLight;

/// Links a rendered sphere to the body it represents in the [`OrbitModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Orbiter(pub BodyId);

/// Build the scene and the per-body speed controls.
///
/// This should only run once. Running it again duplicates every entity and slider.
#[allow(clippy::too_many_arguments)]
pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut panel: ResMut<ControlPanel>,
    mut surface: ResMut<RenderSurface>,
    config: Res<SceneConfig>,
    model: Res<OrbitModel>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    let (sectors, stacks) = config.sphere_resolution;
    let viewport = window
        .single()
        .ok()
        .map(|w| Vec2::new(w.width(), w.height()))
        .filter(|v| v.x > 0.0 && v.y > 0.0)
        .unwrap_or(config.fallback_viewport);

    commands.insert_resource(AmbientLight {
        brightness: config.ambient_brightness,
        ..default()
    });
    commands.insert_resource(ClearColor(config.clear_color));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN.radius).mesh().uv(sectors, stacks))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SUN.color(),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Sun,
    ));
    commands.spawn((
        PointLight {
            color: config.light_color,
            intensity: config.light_intensity,
            range: config.light_range,
            ..default()
        },
        Transform::IDENTITY,
        SunLight,
    ));

    for (id, body) in model.iter() {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.params.radius).mesh().uv(sectors, stacks))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: body.params.color(),
                ..default()
            })),
            Transform::from_translation(body.position()),
            Name::new(body.params.name),
            Orbiter(id),
        ));
        panel.sliders.push(SpeedSlider {
            body: id,
            label: format!("{}: ", body.params.name),
            value: body.state.speed,
        });
    }

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(config.projection(viewport)),
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    surface.width = viewport.x;
    surface.height = viewport.y;

    info!(
        bodies = model.len(),
        width = viewport.x,
        height = viewport.y,
        "built scene"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlEvent;
    use crate::{ScenePlugin, SimulationPlugin};
    use bevy_gui::window::WindowResolution;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scene_app(model: OrbitModel) -> App {
        let mut app = App::new();
        app.insert_resource(model)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_plugins((SimulationPlugin, ScenePlugin));
        app
    }

    #[test]
    fn spawns_every_body() {
        let model = OrbitModel::new(&mut StdRng::seed_from_u64(42));
        let mut app = scene_app(model.clone());
        // run startup without letting the driver touch anything
        app.world_mut().resource_mut::<PlaybackController>().pause();
        app.update();

        let world = app.world_mut();
        let mut orbiters = world.query::<(&Orbiter, &Transform, &Name)>();
        let mut seen = orbiters
            .iter(world)
            .map(|(o, t, n)| (o.0, t.translation, n.as_str().to_owned()))
            .collect::<Vec<_>>();
        seen.sort_by_key(|s| s.0);
        assert_eq!(seen.len(), PLANETS.len());
        for (id, pos, name) in seen {
            let body = model.get(id).unwrap();
            assert_eq!(name, body.params.name);
            let a = body.state.angle;
            let d = body.params.distance;
            assert_abs_diff_eq!(pos.x, a.cos() * d, epsilon = 1e-5);
            assert_eq!(pos.y, 0.0);
            assert_abs_diff_eq!(pos.z, a.sin() * d, epsilon = 1e-5);
        }

        let mut sun = world.query_filtered::<&Transform, With<Sun>>();
        assert_eq!(sun.single(world).unwrap().translation, Vec3::ZERO);
        let mut light = world.query_filtered::<(&PointLight, &Transform), With<SunLight>>();
        let (light, transform) = light.single(world).unwrap();
        assert_eq!(transform.translation, Vec3::ZERO);
        assert_eq!(light.range, SceneConfig::DEFAULT.light_range);
        assert_eq!(light.intensity, SceneConfig::DEFAULT.light_intensity);
        assert_eq!(light.color, SceneConfig::DEFAULT.light_color);

        let mut sun = world.query_filtered::<&MeshMaterial3d<StandardMaterial>, With<Sun>>();
        let sun = sun.single(world).unwrap().0.clone();
        let mut planets = world.query::<(&Orbiter, &MeshMaterial3d<StandardMaterial>)>();
        let planets = planets
            .iter(world)
            .map(|(o, m)| (o.0, m.0.clone()))
            .collect::<Vec<_>>();
        let materials = world.resource::<Assets<StandardMaterial>>();
        let sun = materials.get(&sun).unwrap();
        assert!(sun.unlit, "the sun should ignore lighting");
        assert_eq!(sun.base_color, SUN.color());
        assert_eq!(planets.len(), PLANETS.len());
        for (id, handle) in planets {
            let material = materials.get(&handle).unwrap();
            let params = PLANETS[id.index()];
            assert!(!material.unlit, "{} should be lit", params.name);
            assert_eq!(material.base_color, params.color());
        }
    }

    #[test]
    fn zero_sized_window_uses_fallback() {
        let mut app = scene_app(OrbitModel::random());
        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(0.0, 0.0),
                ..default()
            },
            PrimaryWindow,
        ));
        app.update();
        let world = app.world_mut();
        let mut camera = world.query_filtered::<&Projection, With<Camera3d>>();
        let Projection::Perspective(proj) = camera.single(world).unwrap() else {
            panic!("expected a perspective projection");
        };
        assert_abs_diff_eq!(proj.aspect_ratio, 1280.0 / 720.0);
        let surface = world.resource::<RenderSurface>();
        assert_eq!((surface.width, surface.height), (1280.0, 720.0));
    }

    #[test]
    fn window_size_sets_aspect() {
        let mut app = scene_app(OrbitModel::random());
        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(900.0, 300.0),
                ..default()
            },
            PrimaryWindow,
        ));
        app.update();
        let world = app.world_mut();
        let mut camera = world.query_filtered::<&Projection, With<Camera3d>>();
        let Projection::Perspective(proj) = camera.single(world).unwrap() else {
            panic!("expected a perspective projection");
        };
        assert_abs_diff_eq!(proj.aspect_ratio, 3.0);
        assert_eq!(world.resource::<RenderSurface>().width, 900.0);
    }

    #[test]
    fn camera_uses_viewport() {
        let mut app = scene_app(OrbitModel::random());
        app.update();
        let world = app.world_mut();
        let mut camera = world.query_filtered::<(&Projection, &Transform), With<Camera3d>>();
        let (proj, transform) = camera.single(world).unwrap();
        let Projection::Perspective(proj) = proj else {
            panic!("expected a perspective projection, got {proj:?}");
        };
        assert_abs_diff_eq!(proj.aspect_ratio, 1280.0 / 720.0);
        assert_abs_diff_eq!(proj.fov, 75f32.to_radians());
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 50.0));
        let surface = world.resource::<RenderSurface>();
        assert_eq!((surface.width, surface.height), (1280.0, 720.0));
    }

    #[test]
    fn sliders_in_creation_order() {
        let mut app = scene_app(OrbitModel::random());
        app.update();
        let panel = app.world().resource::<ControlPanel>();
        assert_eq!(panel.sliders.len(), PLANETS.len());
        for (i, (slider, params)) in panel.sliders.iter().zip(PLANETS).enumerate() {
            assert_eq!(slider.body, BodyId(i as u8));
            assert_eq!(slider.label, format!("{}: ", params.name));
            assert_eq!(slider.value, params.speed);
            assert!(
                SPEED_RANGE.contains(&slider.value),
                "{} slider starts outside of {SPEED_RANGE:?}",
                params.name
            );
            assert_eq!(
                slider.event(),
                ControlEvent::SetSpeed {
                    body: slider.body,
                    value: params.speed
                }
            );
        }
    }
}
