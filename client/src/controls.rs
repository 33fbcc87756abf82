//! Speed sliders and pause/resume buttons.
//!
//! The UI never touches the model directly. It emits [`ControlEvent`]s, which [`apply_controls`] drains before
//! the next animation step.

use bevy_egui::{EguiContexts, egui};
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use orrery_orbit::prelude::*;

/// A request from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
pub enum ControlEvent {
    SetSpeed { body: BodyId, value: f32 },
    Pause,
    Resume,
}

/// A speed control for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedSlider {
    pub body: BodyId,
    pub label: String,
    /// The value currently shown by the slider
    pub value: f32,
}
impl SpeedSlider {
    /// The event sent when the slider moves to its current value.
    pub fn event(&self) -> ControlEvent {
        ControlEvent::SetSpeed {
            body: self.body,
            value: self.value,
        }
    }
}

/// Every speed control, in the order they're shown.
#[derive(Debug, Default, Clone, Resource)]
pub struct ControlPanel {
    pub sliders: Vec<SpeedSlider>,
}

pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<ControlPanel>,
    playback: Res<PlaybackController>,
    mut events: EventWriter<ControlEvent>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::Window::new("Orbital speeds")
        .resizable(false)
        .show(ctx, |ui| {
            for slider in &mut panel.sliders {
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(slider.label.as_str());
                        ui.add(
                            egui::Slider::new(&mut slider.value, SPEED_RANGE)
                                .step_by(SPEED_STEP as f64)
                                .fixed_decimals(3),
                        )
                        .changed()
                    })
                    .inner;
                if changed {
                    events.write(slider.event());
                }
            }
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Pause").clicked() {
                    events.write(ControlEvent::Pause);
                }
                if ui.button("Resume").clicked() {
                    events.write(ControlEvent::Resume);
                }
                ui.label(if playback.is_paused() {
                    "paused"
                } else {
                    "running"
                });
            });
        });
    Ok(())
}

/// Apply pending control events, in the order they were sent.
pub fn apply_controls(
    mut events: EventReader<ControlEvent>,
    mut model: ResMut<OrbitModel>,
    mut playback: ResMut<PlaybackController>,
) {
    for event in events.read() {
        match *event {
            ControlEvent::SetSpeed { body, value } => match model.set_speed(body, value) {
                Ok(()) => debug!("speed of {body} set to {value}"),
                Err(err) => warn!("ignoring speed change: {err}"),
            },
            ControlEvent::Pause => {
                if playback.pause() {
                    debug!("paused");
                }
            }
            ControlEvent::Resume => {
                if playback.resume() {
                    debug!("resumed");
                }
            }
        }
    }
}
