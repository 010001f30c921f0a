// Desktop keyboard input: held keys -> 8-way direction, action hotkeys
use std::collections::HashSet;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::model::{Action, Direction};

const LEFT: [&str; 2] = ["ArrowLeft", "KeyA"];
const RIGHT: [&str; 2] = ["ArrowRight", "KeyD"];
const UP: [&str; 2] = ["ArrowUp", "KeyW"];
const DOWN: [&str; 2] = ["ArrowDown", "KeyS"];

pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "Space" => Some(Action::Jump),
        "ShiftLeft" | "ShiftRight" => Some(Action::Sprint),
        "KeyE" => Some(Action::Interact),
        "KeyF" => Some(Action::Shoot),
        "KeyM" => Some(Action::ToggleMap),
        _ => None,
    }
}

/// Keys whose browser default (page scroll) should be suppressed.
pub fn captures_default(code: &str) -> bool {
    code == "Space" || code.starts_with("Arrow")
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyOutcome {
    pub action: Option<Action>,
    /// Present only when the direction changed since the last emission.
    pub movement: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct KeyboardInput {
    pressed: HashSet<String>,
    last: Direction,
    active: bool,
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self {
            pressed: HashSet::new(),
            last: Direction::ZERO,
            active: true,
        }
    }
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates all key handling. Deactivating forgets held keys.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            log::debug!("keyboard input {}", if active { "enabled" } else { "disabled" });
        }
        self.active = active;
        if !active {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
        self.last = Direction::ZERO;
    }

    pub fn direction(&self) -> Direction {
        let held = |codes: [&str; 2]| codes.iter().any(|c| self.pressed.contains(*c));
        let (mut x, mut y) = (0.0, 0.0);
        if held(LEFT) {
            x -= 1.0;
        }
        if held(RIGHT) {
            x += 1.0;
        }
        if held(UP) {
            y -= 1.0;
        }
        if held(DOWN) {
            y += 1.0;
        }
        if x != 0.0 && y != 0.0 {
            x *= FRAC_1_SQRT_2;
            y *= FRAC_1_SQRT_2;
        }
        Direction::new(x, y)
    }

    pub fn key_down(&mut self, code: &str, repeat: bool) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::default();
        }
        self.pressed.insert(code.to_string());
        KeyOutcome {
            action: if repeat { None } else { action_for_code(code) },
            movement: self.emit_if_changed(),
        }
    }

    pub fn key_up(&mut self, code: &str) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::default();
        }
        self.pressed.remove(code);
        KeyOutcome {
            action: None,
            movement: self.emit_if_changed(),
        }
    }

    fn emit_if_changed(&mut self) -> Option<Direction> {
        let next = self.direction();
        if next == self.last {
            return None;
        }
        self.last = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Direction, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-4 && (a.y - y).abs() < 1e-4
    }

    #[test]
    fn diagonal_is_normalized_and_release_restores_axis() {
        let mut kb = KeyboardInput::new();
        let first = kb.key_down("ArrowLeft", false).movement.unwrap();
        assert_eq!(first, Direction { x: -1.0, y: 0.0 });
        let diag = kb.key_down("ArrowUp", false).movement.unwrap();
        assert!(approx(diag, -0.7071, -0.7071), "{diag:?}");
        let up = kb.key_up("ArrowLeft").movement.unwrap();
        assert_eq!(up, Direction { x: 0.0, y: -1.0 });
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut kb = KeyboardInput::new();
        kb.key_down("KeyA", false);
        let out = kb.key_down("KeyD", false);
        assert_eq!(out.movement, Some(Direction::ZERO));
    }

    #[test]
    fn emission_is_edge_triggered() {
        let mut kb = KeyboardInput::new();
        assert!(kb.key_down("KeyW", false).movement.is_some());
        // auto-repeat and an alias on the same axis change nothing
        assert_eq!(kb.key_down("KeyW", true).movement, None);
        assert_eq!(kb.key_down("ArrowUp", false).movement, None);
        // unrelated key
        assert_eq!(kb.key_down("KeyQ", false), KeyOutcome::default());
        assert_eq!(kb.key_up("ArrowUp").movement, None);
        assert_eq!(kb.key_up("KeyW").movement, Some(Direction::ZERO));
    }

    #[test]
    fn action_keys_map_to_actions() {
        let mut kb = KeyboardInput::new();
        assert_eq!(kb.key_down("Space", false).action, Some(Action::Jump));
        assert_eq!(kb.key_down("ShiftRight", false).action, Some(Action::Sprint));
        assert_eq!(kb.key_down("KeyE", false).action, Some(Action::Interact));
        assert_eq!(kb.key_down("KeyF", false).action, Some(Action::Shoot));
        assert_eq!(kb.key_down("KeyM", false).action, Some(Action::ToggleMap));
        assert_eq!(kb.key_down("KeyM", true).action, None);
    }

    #[test]
    fn inactive_input_emits_nothing() {
        let mut kb = KeyboardInput::new();
        kb.key_down("KeyD", false);
        kb.set_active(false);
        assert_eq!(kb.direction(), Direction::ZERO);
        assert_eq!(kb.key_down("KeyM", false), KeyOutcome::default());
        assert_eq!(kb.key_down("KeyW", false), KeyOutcome::default());
        assert_eq!(kb.key_up("KeyD"), KeyOutcome::default());
        kb.set_active(true);
        assert_eq!(kb.key_down("KeyD", false).movement, Some(Direction { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn arrows_and_space_capture_default() {
        assert!(captures_default("Space"));
        assert!(captures_default("ArrowDown"));
        assert!(!captures_default("KeyW"));
    }
}
