//! Core data models for City Runner.
//! Positions and directions, the session game state and its reducer.

use std::rc::Rc;
use yew::Reducible;

/// Upper bound of both position axes (percent of the map).
pub const WORLD_MAX: f64 = 100.0;
pub const MAX_HEALTH: u32 = 100;
pub const MAX_WANTED_LEVEL: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_axis(x),
            y: clamp_axis(y),
        }
    }

    /// One movement step: `self + direction * speed`, clamped to the map.
    pub fn step(self, direction: Direction, speed: f64) -> Position {
        Position::new(self.x + direction.x * speed, self.y + direction.y * speed)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_axis(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, WORLD_MAX) }
}

/// Normalized movement intent, each component in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
}

impl Direction {
    pub const ZERO: Direction = Direction { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        let unit = |v: f64| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Self { x: unit(x), y: unit(y) }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[cfg(test)]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Discrete player commands. Everything except `ToggleMap` is a hook for
/// gameplay that does not exist yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Sprint,
    Interact,
    Shoot,
    ToggleMap,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Jump => "Jump",
            Action::Sprint => "Sprint",
            Action::Interact => "Interact",
            Action::Shoot => "Shoot",
            Action::ToggleMap => "Map",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    GunStore,
    Garage,
    Dealership,
    Mechanic,
    Apartment,
}

impl LocationKind {
    pub fn label(self) -> &'static str {
        match self {
            LocationKind::GunStore => "Gun Store",
            LocationKind::Garage => "Garage",
            LocationKind::Dealership => "Dealership",
            LocationKind::Mechanic => "Mechanic",
            LocationKind::Apartment => "Apartment",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LocationKind::GunStore => "#f85149",
            LocationKind::Garage => "#58a6ff",
            LocationKind::Dealership => "#f0883e",
            LocationKind::Mechanic => "#2ea043",
            LocationKind::Apartment => "#d29922",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub kind: LocationKind,
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

pub const LOCATIONS: &[Location] = &[
    Location { kind: LocationKind::GunStore, x: 25.0, y: 30.0, label: "Ammu-Nation" },
    Location { kind: LocationKind::Garage, x: 40.0, y: 60.0, label: "Premium Garage" },
    Location { kind: LocationKind::Dealership, x: 70.0, y: 20.0, label: "Luxury Motors" },
    Location { kind: LocationKind::Mechanic, x: 80.0, y: 80.0, label: "LS Customs" },
    Location { kind: LocationKind::Apartment, x: 15.0, y: 70.0, label: "High-End Apartment" },
    Location { kind: LocationKind::Garage, x: 60.0, y: 40.0, label: "6-Car Garage" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// 0..=100.
    pub health: u32,
    pub money: u64,
    /// Stars shown in the HUD, 0..=5.
    pub wanted_level: u8,
    /// Always one of `weapons`.
    pub current_weapon: String,
    /// Hotbar order.
    pub weapons: Vec<String>,
    pub position: Position,
    /// Nothing sets this yet.
    pub in_vehicle: bool,
    pub map_open: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            health: MAX_HEALTH,
            money: 1500,
            wanted_level: 0,
            current_weapon: "Pistol".to_string(),
            weapons: vec!["Pistol".to_string(), "SMG".to_string()],
            position: Position::CENTER,
            in_vehicle: false,
            map_open: false,
        }
    }

    /// Applies one transition in place. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        use GameAction::*;
        match action {
            Move { direction, speed } => {
                let next = self.position.step(direction, speed);
                if next == self.position {
                    return false;
                }
                self.position = next;
                true
            }
            Perform(act) => self.perform(act),
            CloseMap => {
                if !self.map_open {
                    return false;
                }
                log::info!("map closed");
                self.map_open = false;
                true
            }
            SetHealth(hp) => set_if_changed(&mut self.health, hp.min(MAX_HEALTH)),
            SetWantedLevel(level) => {
                set_if_changed(&mut self.wanted_level, level.min(MAX_WANTED_LEVEL))
            }
            SelectWeapon(name) => {
                if self.current_weapon == name || !self.weapons.contains(&name) {
                    return false;
                }
                self.current_weapon = name;
                true
            }
            Reset => set_if_changed(self, GameState::new()),
        }
    }

    fn perform(&mut self, action: Action) -> bool {
        match action {
            Action::Jump => {
                log::info!("player jumps");
                false
            }
            Action::Sprint => {
                log::info!("player sprints");
                false
            }
            Action::Interact => {
                log::info!("player interacts");
                false
            }
            Action::Shoot => {
                log::info!("player shoots with {}", self.current_weapon);
                false
            }
            Action::ToggleMap => {
                self.map_open = !self.map_open;
                log::info!("map {}", if self.map_open { "opened" } else { "closed" });
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn set_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    /// One movement frame from the active input source.
    Move { direction: Direction, speed: f64 },
    Perform(Action),
    CloseMap,
    /// Hooks for damage and heat systems; nothing dispatches them yet.
    #[allow(dead_code)]
    SetHealth(u32),
    #[allow(dead_code)]
    SetWantedLevel(u8),
    SelectWeapon(String),
    Reset,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}
