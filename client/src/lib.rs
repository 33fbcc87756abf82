//! Bevy front end for the orrery.
//!
//! [`SimulationPlugin`] is everything that runs per frame and can be used without a renderer. [`ScenePlugin`]
//! builds the rendered scene, and [`ControlPanelPlugin`] draws the egui controls.

use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use bevy_gui::window::WindowResized;
use orrery_orbit::prelude::*;

pub mod config;
pub mod controls;
pub mod driver;
pub mod frame_loop;
pub mod scene;

/// Ordering of the per-frame systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum OrrerySet {
    /// Control events and resizes get applied
    Input,
    /// Orbits advance, unless paused
    Advance,
    /// Transforms get copied from the model
    Sync,
}

pub struct SimulationPlugin;
impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<OrbitModel>() {
            app.insert_resource(OrbitModel::random());
        }
        app.init_resource::<PlaybackController>()
            .init_resource::<frame_loop::FrameLoop>()
            .init_resource::<driver::RenderSurface>()
            .init_resource::<config::SceneConfig>()
            .add_event::<controls::ControlEvent>()
            .add_event::<WindowResized>()
            .configure_sets(
                Update,
                (OrrerySet::Input, OrrerySet::Advance, OrrerySet::Sync)
                    .chain()
                    .run_if(frame_loop::frame_loop_running),
            )
            .add_systems(
                Update,
                (
                    (controls::apply_controls, driver::react_to_resize).in_set(OrrerySet::Input),
                    driver::advance_orbits
                        .run_if(driver::orbits_running)
                        .in_set(OrrerySet::Advance),
                    driver::sync_orbiters.in_set(OrrerySet::Sync),
                ),
            )
            .add_systems(Last, frame_loop::stop_when_cancelled);
    }
}

pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<controls::ControlPanel>()
            .add_systems(Startup, scene::build_scene);
    }
}

pub struct ControlPanelPlugin;
impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<bevy_egui::EguiPlugin>() {
            app.add_plugins(bevy_egui::EguiPlugin::default());
        }
        app.add_systems(bevy_egui::EguiPrimaryContextPass, controls::control_panel_ui);
    }
}

/// The whole orrery: simulation, scene and controls.
pub struct OrreryPlugin;
impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SimulationPlugin, ScenePlugin, ControlPanelPlugin));
    }
}
