//! Tunables read once at startup.
//!
//! The host page may embed overrides as
//! `<script type="application/json" id="game-config">{ "keyboard_speed": 1.0 }</script>`.
//! Missing keys keep their defaults.

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Percent of the map per frame at full joystick deflection.
    pub touch_speed: f64,
    /// Percent of the map per frame while a movement key is held.
    pub keyboard_speed: f64,
    /// Pixels between the joystick rim and the knob's travel limit.
    pub joystick_inset: f64,
    /// Background scroll in pixels per percent of position.
    pub world_scroll: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            touch_speed: 0.5,
            keyboard_speed: 0.8,
            joystick_inset: 10.0,
            world_scroll: 10.0,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: GameConfig = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Reads overrides from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json_str(&raw) {
            Ok(cfg) => {
                log::debug!("loaded config overrides: {:?}", cfg);
                cfg
            }
            Err(e) => {
                log::warn!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    fn sanitized(self) -> Self {
        let d = Self::default();
        let pick = |v: f64, fallback: f64| if v.is_finite() && v >= 0.0 { v } else { fallback };
        Self {
            touch_speed: pick(self.touch_speed, d.touch_speed),
            keyboard_speed: pick(self.keyboard_speed, d.keyboard_speed),
            joystick_inset: pick(self.joystick_inset, d.joystick_inset),
            world_scroll: pick(self.world_scroll, d.world_scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_is_slower_than_keyboard_by_default() {
        let cfg = GameConfig::default();
        assert!(cfg.touch_speed < cfg.keyboard_speed);
        assert_eq!(cfg.keyboard_speed, 0.8);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = GameConfig::from_json_str(r#"{ "keyboard_speed": 1.25 }"#).unwrap();
        assert_eq!(cfg.keyboard_speed, 1.25);
        assert_eq!(cfg.touch_speed, 0.5);
        assert_eq!(cfg.joystick_inset, 10.0);
    }

    #[test]
    fn negative_values_fall_back() {
        let cfg = GameConfig::from_json_str(r#"{ "touch_speed": -3, "world_scroll": 4 }"#).unwrap();
        assert_eq!(cfg.touch_speed, 0.5);
        assert_eq!(cfg.world_scroll, 4.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(GameConfig::from_json_str("{ keyboard_speed: }").is_err());
        assert!(GameConfig::from_json_str(r#"{ "touch_speed": "fast" }"#).is_err());
    }
}
