use bevy_gui::log::LogPlugin;
use bevy_gui::prelude::*;
use orrery_client::OrreryPlugin;

/// Canvas the renderer attaches to when running in a browser.
const CANVAS: &str = "#solarCanvas";

fn main() -> AppExit {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Orrery".into(),
                        canvas: Some(CANVAS.into()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,orrery_client=debug".into(),
                    ..default()
                }),
        )
        .add_plugins(OrreryPlugin)
        .run()
}
