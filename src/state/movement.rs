//! Continuous movement driven by the active input source.
//!
//! The loop holds at most one pending frame. It is armed when some source
//! reports a non-zero direction and stops re-arming as soon as none does.

use crate::config::GameConfig;
use crate::model::Direction;
use crate::state::frame::FrameScheduler;

/// What one frame should apply to the player position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub direction: Direction,
    pub speed: f64,
}

pub struct MovementLoop<S: FrameScheduler> {
    scheduler: S,
    /// Joystick direction while a drag is in progress.
    touch: Option<Direction>,
    keyboard: Direction,
    touch_speed: f64,
    keyboard_speed: f64,
    pending: Option<i32>,
}

impl<S: FrameScheduler> MovementLoop<S> {
    pub fn new(config: &GameConfig, scheduler: S) -> Self {
        Self {
            scheduler,
            touch: None,
            keyboard: Direction::ZERO,
            touch_speed: config.touch_speed,
            keyboard_speed: config.keyboard_speed,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Touch wins over keyboard while the joystick is deflected.
    pub fn active(&self) -> Option<Step> {
        if let Some(direction) = self.touch {
            if !direction.is_zero() {
                return Some(Step {
                    direction,
                    speed: self.touch_speed,
                });
            }
        }
        if self.keyboard.is_zero() {
            return None;
        }
        Some(Step {
            direction: self.keyboard,
            speed: self.keyboard_speed,
        })
    }

    pub fn set_touch(&mut self, direction: Direction) {
        self.touch = Some(direction);
        self.sync();
    }

    pub fn stop_touch(&mut self) {
        self.touch = None;
        self.sync();
    }

    pub fn set_keyboard(&mut self, direction: Direction) {
        self.keyboard = direction;
        self.sync();
    }

    /// Session restart: drops the joystick drag. Held keys keep steering.
    pub fn restart(&mut self) {
        self.stop_touch();
    }

    /// Forgets all input and cancels the pending frame.
    pub fn halt(&mut self) {
        self.touch = None;
        self.keyboard = Direction::ZERO;
        self.cancel_pending();
    }

    /// Entry point of the scheduled frame.
    pub fn on_frame(&mut self) -> Option<Step> {
        self.pending = None;
        let step = self.active()?;
        self.arm();
        Some(step)
    }

    fn sync(&mut self) {
        if self.active().is_none() {
            self.cancel_pending();
        } else if self.pending.is_none() {
            log::debug!("movement loop started");
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.pending = self.scheduler.request();
        if self.pending.is_none() {
            log::warn!("could not schedule a movement frame");
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            log::debug!("movement loop stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameAction, GameState, Position};

    #[derive(Default)]
    struct FakeFrames {
        next: i32,
        requested: Vec<i32>,
        cancelled: Vec<i32>,
    }

    impl FrameScheduler for FakeFrames {
        fn request(&mut self) -> Option<i32> {
            self.next += 1;
            self.requested.push(self.next);
            Some(self.next)
        }

        fn cancel(&mut self, handle: i32) {
            self.cancelled.push(handle);
        }
    }

    fn new_loop() -> MovementLoop<FakeFrames> {
        MovementLoop::new(&GameConfig::default(), FakeFrames::default())
    }

    fn right() -> Direction {
        Direction::new(1.0, 0.0)
    }

    #[test]
    fn idle_until_input() {
        let mut ml = new_loop();
        assert!(!ml.is_running());
        assert_eq!(ml.on_frame(), None);
        ml.set_keyboard(Direction::ZERO);
        assert!(ml.scheduler().requested.is_empty());
    }

    #[test]
    fn keyboard_arms_once_and_rearms_each_frame() {
        let mut ml = new_loop();
        ml.set_keyboard(right());
        ml.set_keyboard(Direction::new(0.0, 1.0));
        assert_eq!(ml.scheduler().requested, vec![1]);
        let step = ml.on_frame().unwrap();
        assert_eq!(step.speed, 0.8);
        assert_eq!(step.direction, Direction::new(0.0, 1.0));
        assert_eq!(ml.scheduler().requested, vec![1, 2]);
        assert!(ml.is_running());
    }

    #[test]
    fn releasing_keys_cancels_the_frame() {
        let mut ml = new_loop();
        ml.set_keyboard(right());
        ml.on_frame();
        ml.set_keyboard(Direction::ZERO);
        assert!(!ml.is_running());
        assert_eq!(ml.scheduler().cancelled, vec![2]);
        // a stale callback that fires anyway moves nothing and does not re-arm
        assert_eq!(ml.on_frame(), None);
        assert_eq!(ml.scheduler().requested.len(), 2);
    }

    #[test]
    fn touch_overrides_keyboard_with_its_own_speed() {
        let mut ml = new_loop();
        ml.set_keyboard(right());
        ml.set_touch(Direction::new(0.0, -0.5));
        let step = ml.active().unwrap();
        assert_eq!(step.speed, 0.5);
        assert_eq!(step.direction, Direction::new(0.0, -0.5));
        ml.stop_touch();
        assert_eq!(ml.active().unwrap().direction, right());
        assert!(ml.is_running());
    }

    #[test]
    fn centered_joystick_does_not_move() {
        let mut ml = new_loop();
        ml.set_touch(Direction::ZERO);
        assert!(!ml.is_running());
        ml.set_touch(right());
        assert!(ml.is_running());
        ml.stop_touch();
        assert!(!ml.is_running());
        assert_eq!(ml.scheduler().cancelled, vec![1]);
    }

    #[test]
    fn halt_drops_all_input() {
        let mut ml = new_loop();
        ml.set_keyboard(right());
        ml.set_touch(right());
        ml.halt();
        assert!(!ml.is_running());
        assert_eq!(ml.active(), None);
        assert_eq!(ml.on_frame(), None);
    }

    #[test]
    fn key_held_through_restart_keeps_moving() {
        use crate::state::KeyboardInput;
        let mut ml = new_loop();
        let mut kb = KeyboardInput::new();
        let mut gs = GameState::new();
        if let Some(d) = kb.key_down("KeyD", false).movement {
            ml.set_keyboard(d);
        }
        ml.set_touch(Direction::new(0.0, 1.0));
        ml.restart();
        gs.apply(GameAction::Reset);
        for _ in 0..10 {
            if let Some(d) = kb.key_down("KeyD", true).movement {
                ml.set_keyboard(d);
            }
            if let Some(step) = ml.on_frame() {
                gs.apply(GameAction::Move { direction: step.direction, speed: step.speed });
            }
        }
        assert!(ml.is_running());
        assert_eq!(ml.active().unwrap().direction, right());
        assert!(gs.position.x > Position::CENTER.x);
        assert_eq!(gs.position.y, Position::CENTER.y);
    }

    #[test]
    fn frames_drive_the_store_until_released() {
        let mut ml = new_loop();
        let mut gs = GameState::new();
        ml.set_keyboard(right());
        for _ in 0..3 {
            if let Some(step) = ml.on_frame() {
                gs.apply(GameAction::Move { direction: step.direction, speed: step.speed });
            }
        }
        assert!((gs.position.x - 52.4).abs() < 1e-9);
        ml.set_keyboard(Direction::ZERO);
        let before = gs.position;
        while let Some(step) = ml.on_frame() {
            gs.apply(GameAction::Move { direction: step.direction, speed: step.speed });
        }
        assert_eq!(gs.position, before);
        assert_eq!(before.y, Position::CENTER.y);
    }
}
