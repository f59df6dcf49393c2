//! Game settings
//!
//! Canvas size and physics tunables. Loaded from JSON (partial documents are
//! fine, missing fields fall back to defaults) and validated before a
//! playthrough is built from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::world::has_placement_outside_band;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("platform_count must be at least 1")]
    NoPlatforms,
    #[error("canvas width {canvas_width} leaves no room for a {platform_width}px platform outside the center band")]
    CanvasTooNarrow {
        canvas_width: f32,
        platform_width: f32,
    },
}

/// Canvas and physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Platforms seeded at the start of a run (the spawn anchor is extra)
    pub platform_count: u32,

    // === Doodler ===
    pub doodler_width: f32,
    pub doodler_height: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_speed: f32,
    pub move_speed: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            platform_count: DEFAULT_PLATFORM_COUNT,

            doodler_width: DOODLER_WIDTH,
            doodler_height: DOODLER_HEIGHT,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_speed: JUMP_SPEED,
            move_speed: MOVE_SPEED,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: {}x{} canvas, {} platforms",
            settings.canvas_width,
            settings.canvas_height,
            settings.platform_count
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("doodler_width", self.doodler_width),
            ("doodler_height", self.doodler_height),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("jump_speed", self.jump_speed),
            ("move_speed", self.move_speed),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NonPositive { name, value });
            }
        }

        if self.platform_count == 0 {
            return Err(SettingsError::NoPlatforms);
        }

        // Rejection sampling would never terminate otherwise
        if !has_placement_outside_band(self.canvas_width, self.platform_width) {
            return Err(SettingsError::CanvasTooNarrow {
                canvas_width: self.canvas_width,
                platform_width: self.platform_width,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "platform_count": 9 }"#).unwrap();
        assert_eq!(settings.platform_count, 9);
        assert_eq!(settings.canvas_width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(settings.gravity, GRAVITY);
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let settings = Settings {
            canvas_height: 800.0,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let settings = Settings {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositive { name: "gravity", .. })
        ));

        let settings = Settings {
            canvas_height: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_platforms() {
        let settings = Settings {
            platform_count: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::NoPlatforms)));
    }

    #[test]
    fn test_rejects_canvas_too_narrow() {
        let settings = Settings {
            canvas_width: 160.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::CanvasTooNarrow { .. })
        ));
    }
}
