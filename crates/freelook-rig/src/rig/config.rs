//! Rig configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lowest allowed pitch in degrees (looking straight up)
pub const PITCH_MIN: f32 = -90.0;
/// Highest allowed pitch in degrees (looking straight down)
pub const PITCH_MAX: f32 = 90.0;

/// Rig tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Degrees of rotation per unit of pointer motion
    pub rotation_speed: f32,
    /// Movement speed in units per second at full axis deflection
    pub movement_speed: f32,
    /// Two presses closer together than this (seconds) toggle cursor capture
    pub double_click_window: f64,
    /// Field of view multiplier while sprinting
    pub sprint_fov_multiplier: f32,
    /// How quickly the field of view chases its target, per second
    pub fov_blend_rate: f32,
    /// Movement multiplier while sprinting
    pub sprint_movement_multiplier: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 2.0,
            movement_speed: 5.0,
            double_click_window: 0.3,
            sprint_fov_multiplier: 1.2,
            fov_blend_rate: 10.0,
            sprint_movement_multiplier: 1.5,
        }
    }
}

impl RigConfig {
    /// Check every tunable is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("rotation_speed", self.rotation_speed),
            ("movement_speed", self.movement_speed),
            ("sprint_fov_multiplier", self.sprint_fov_multiplier),
            ("fov_blend_rate", self.fov_blend_rate),
            ("sprint_movement_multiplier", self.sprint_movement_multiplier),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    name,
                    value: value as f64,
                });
            }
        }

        if !self.double_click_window.is_finite() || self.double_click_window <= 0.0 {
            return Err(ConfigError::DoubleClickWindow(self.double_click_window));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RigConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.double_click_window, 0.3);
        assert_eq!(config.sprint_movement_multiplier, 1.5);
    }

    #[test]
    fn rejects_bad_tunables() {
        let config = RigConfig {
            movement_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "movement_speed",
                value: -1.0
            })
        );

        let config = RigConfig {
            fov_blend_rate: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "fov_blend_rate",
                ..
            })
        ));

        let config = RigConfig {
            double_click_window: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DoubleClickWindow(0.0)));
    }
}
