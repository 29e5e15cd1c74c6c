//! Game configuration
//!
//! Field size, palette, divider style and tick policy. Gameplay constants
//! (speeds, deadzone, paddle size) live in [`crate::consts`] and are not
//! configurable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::consts::*;
use crate::driver::TickPolicy;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("field {width}x{height} is invalid (minimum {min_width}x{min_height})")]
    Field {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
    #[error("tick rate must be positive and finite, got {0}")]
    TickRate(f32),
    #[error("divider dash and gap must be positive, got {dash}/{gap}")]
    Divider { dash: f32, gap: f32 },
}

/// Playing field dimensions in field units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Smallest field that still fits both paddles and a ball between them
    pub const MIN_WIDTH: f32 = 2.0 * (PADDLE_WIDTH + 2.0 * BALL_RADIUS);
    pub const MIN_HEIGHT: f32 = PADDLE_HEIGHT + 2.0 * BALL_RADIUS;
}

/// Display colors for every drawn element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub divider: Color,
    pub left_paddle: Color,
    pub right_paddle: Color,
    pub ball: Color,
    pub left_score: Color,
    pub right_score: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let blue = Color::rgb(0x44 as f32 / 255.0, 0xaa as f32 / 255.0, 0xee as f32 / 255.0);
        let red = Color::rgb(0xee as f32 / 255.0, 0x44 as f32 / 255.0, 0x44 as f32 / 255.0);
        Self {
            background: Color::rgb(0x33 as f32 / 255.0, 0x33 as f32 / 255.0, 0x33 as f32 / 255.0),
            divider: Color::WHITE,
            left_paddle: blue,
            right_paddle: red,
            ball: Color::WHITE,
            left_score: blue,
            right_score: red,
        }
    }
}

/// Dashed center line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerStyle {
    pub dash: f32,
    pub gap: f32,
    pub thickness: f32,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            dash: 16.0,
            gap: 16.0,
            thickness: 1.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub palette: Palette,
    pub divider: DividerStyle,
    /// Ticks per second. `None` runs one tick per display frame.
    pub tick_rate: Option<f32>,
    /// RNG seed for serve directions. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config handed over by the host, falling back to defaults when it is
    /// absent, blank or rejected
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded config from host");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let FieldConfig { width, height } = self.field;
        let field_ok = width.is_finite()
            && height.is_finite()
            && width >= FieldConfig::MIN_WIDTH
            && height >= FieldConfig::MIN_HEIGHT;
        if !field_ok {
            return Err(ConfigError::Field {
                width,
                height,
                min_width: FieldConfig::MIN_WIDTH,
                min_height: FieldConfig::MIN_HEIGHT,
            });
        }

        if let Some(hz) = self.tick_rate {
            if !(hz.is_finite() && hz > 0.0) {
                return Err(ConfigError::TickRate(hz));
            }
        }

        let DividerStyle { dash, gap, .. } = self.divider;
        if !(dash > 0.0 && gap > 0.0) {
            return Err(ConfigError::Divider { dash, gap });
        }

        Ok(())
    }

    pub fn tick_policy(&self) -> TickPolicy {
        match self.tick_rate {
            Some(hz) => TickPolicy::Fixed { hz },
            None => TickPolicy::PerFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_layout() {
        let config = Config::default();
        assert_eq!(config.field.width, 800.0);
        assert_eq!(config.field.height, 600.0);
        assert_eq!(config.palette.left_paddle.to_hex(), "#44aaee");
        assert_eq!(config.palette.right_paddle.to_hex(), "#ee4444");
        assert_eq!(config.palette.background.to_hex(), "#333333");
        assert_eq!(config.tick_policy(), TickPolicy::PerFrame);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r##"{ "field": { "width": 1024 }, "palette": { "ball": "#ff0" } }"##)
            .unwrap();
        assert_eq!(config.field.width, 1024.0);
        assert_eq!(config.field.height, 600.0);
        assert_eq!(config.palette.ball.to_hex(), "#ffff00");
        assert_eq!(config.palette.divider, Color::WHITE);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = Config::default();
        config.tick_rate = Some(60.0);
        config.seed = Some(42);
        let json = config.to_json().unwrap();
        let back = Config::from_json(&json).unwrap();
        assert_eq!(back.tick_policy(), TickPolicy::Fixed { hz: 60.0 });
        assert_eq!(back.seed, Some(42));
        assert_eq!(back.palette.left_score.to_hex(), config.palette.left_score.to_hex());
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = Config::from_json(r#"{ "palette": { "ball": "white" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn test_rejects_tiny_field() {
        let err = Config::from_json(r#"{ "field": { "width": 800, "height": 50 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Field { height, .. } if height == 50.0));
    }

    #[test]
    fn test_rejects_bad_tick_rate() {
        let err = Config::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TickRate(_)));
    }

    #[test]
    fn test_host_config_opts_into_fixed_rate() {
        let config = Config::from_json_or_default(Some(r#"{ "tick_rate": 120, "seed": 7 }"#));
        assert_eq!(config.tick_policy(), TickPolicy::Fixed { hz: 120.0 });
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_host_config_falls_back_to_defaults() {
        assert_eq!(Config::from_json_or_default(None), Config::default());
        assert_eq!(Config::from_json_or_default(Some("  ")), Config::default());
        assert_eq!(Config::from_json_or_default(Some("{ not json")), Config::default());
        assert_eq!(
            Config::from_json_or_default(Some(r#"{ "field": { "height": 50 } }"#)),
            Config::default()
        );
    }

    #[test]
    fn test_serialize_error_message() {
        let inner = serde_json::from_str::<u8>("x").unwrap_err();
        let err = ConfigError::Serialize(inner);
        assert!(err.to_string().starts_with("failed to serialize config"));
        assert!(Config::default().to_json().is_ok());
    }

    #[test]
    fn test_rejects_zero_dash() {
        let err = Config::from_json(r#"{ "divider": { "dash": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Divider { .. }));
    }
}
