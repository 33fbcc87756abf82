/// Whether orbits are advancing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playback {
    #[default]
    Running,
    Paused,
}

/// Owner of the [`Playback`] state.
///
/// The state only changes through [`pause`](Self::pause) and [`resume`](Self::resume). Both are idempotent, and
/// return whether they actually changed anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ecs", derive(bevy_ecs_macros::Resource))]
pub struct PlaybackController {
    state: Playback,
}
impl PlaybackController {
    pub const fn new() -> Self {
        Self {
            state: Playback::Running,
        }
    }
    #[inline(always)]
    pub const fn state(&self) -> Playback {
        self.state
    }
    #[inline(always)]
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, Playback::Paused)
    }
    pub fn pause(&mut self) -> bool {
        self.transition(Playback::Paused)
    }
    pub fn resume(&mut self) -> bool {
        self.transition(Playback::Running)
    }
    fn transition(&mut self, to: Playback) -> bool {
        std::mem::replace(&mut self.state, to) != to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrbitModel;

    #[test]
    fn transitions() {
        let mut ctl = PlaybackController::new();
        assert_eq!(ctl.state(), Playback::Running);
        assert!(!ctl.resume());
        assert!(ctl.pause());
        assert!(ctl.is_paused());
        assert!(!ctl.pause());
        assert!(ctl.is_paused());
        assert!(ctl.resume());
        assert_eq!(ctl.state(), Playback::Running);
    }

    #[test]
    fn pause_holds_angles() {
        let mut model = OrbitModel::random();
        let mut ctl = PlaybackController::default();
        let frame = |model: &mut OrbitModel, ctl: &PlaybackController| {
            if !ctl.is_paused() {
                model.advance();
            }
        };
        for _ in 0..5 {
            frame(&mut model, &ctl);
        }
        ctl.pause();
        let held = model.clone();
        for _ in 0..100 {
            frame(&mut model, &ctl);
        }
        assert_eq!(model, held);
        ctl.resume();
        frame(&mut model, &ctl);
        for ((_, old), (_, new)) in held.iter().zip(model.iter()) {
            assert_eq!(new.state.angle, old.state.angle + old.state.speed);
        }
    }
}
