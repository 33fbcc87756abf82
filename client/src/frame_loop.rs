//! Stopping the animation loop.
//!
//! Normally the host drives frames forever. A [`FrameLoop`] carries a [`CancellationToken`] that stops the
//! animation systems and asks the app to exit, which is how tests and headless runs end cleanly.

use bevy_gui::app::PluginsState;
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use orrery_orbit::prelude::*;
use std::ops::ControlFlow;

#[derive(Debug, Default, Clone, Resource)]
pub struct FrameLoop {
    pub token: CancellationToken,
}
impl FrameLoop {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

/// Run condition: true until the loop's token is cancelled.
pub fn frame_loop_running(frame_loop: Res<FrameLoop>) -> bool {
    !frame_loop.token.is_cancelled()
}

pub fn stop_when_cancelled(frame_loop: Res<FrameLoop>, mut exit: EventWriter<AppExit>) {
    if frame_loop.token.is_cancelled() {
        info!("frame loop cancelled, exiting");
        exit.write(AppExit::Success);
    }
}

/// An app runner that updates the app in a loop, without a window.
///
/// It stops once the app's [`FrameLoop`] token is cancelled, an [`AppExit`] is sent, or after `max_frames` frames.
pub fn headless_runner(max_frames: Option<u64>) -> impl FnOnce(App) -> AppExit + 'static {
    move |mut app: App| {
        if app.plugins_state() != PluginsState::Cleaned {
            app.finish();
            app.cleanup();
        }
        let token = app
            .world_mut()
            .get_resource_or_init::<FrameLoop>()
            .token
            .clone();
        let mut exit = None;
        let mut task = RepeatingTask::new(token, || {
            app.update();
            match app.should_exit() {
                Some(code) => {
                    exit = Some(code);
                    ControlFlow::Break(())
                }
                None => ControlFlow::Continue(()),
            }
        });
        let frames = match max_frames {
            Some(limit) => task.run_for(limit),
            None => task.run(),
        };
        drop(task);
        debug!(frames, "headless run finished");
        exit.unwrap_or(AppExit::Success)
    }
}
