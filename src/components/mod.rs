pub mod app;
pub mod game_map;
pub mod hud;
pub mod keyboard_controls;
pub mod legend;
pub mod mobile_controls;
pub mod player;
