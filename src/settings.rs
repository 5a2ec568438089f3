//! Settings with persistence
//!
//! Settings are saved to `~/.config/freelook/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use freelook_rig::{AxisRamp, RigConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub video: VideoSettings,
    /// Rig tunables
    pub controls: RigConfig,
    pub input: InputSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("freelook"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// Vertical field of view in degrees, the rig's base FOV
    pub fov: f32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov: 60.0,
        }
    }
}

/// Pointer settings applied before the rig sees any motion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Multiplier on raw pointer motion
    pub mouse_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
    /// Ease the movement keys in and out instead of snapping to full speed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_ramp: Option<AxisRamp>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.1,
            invert_y: false,
            axis_ramp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [video]
            fov = 75.0

            [controls]
            movement_speed = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.video.fov, 75.0);
        assert_eq!(settings.video.width, 1280);
        assert_eq!(settings.controls.movement_speed, 8.0);
        assert_eq!(settings.controls.double_click_window, 0.3);
        assert!(!settings.input.invert_y);
    }

    #[test]
    fn axis_ramp_is_opt_in() {
        let settings = Settings::default();
        assert_eq!(settings.input.axis_ramp, None);
        let saved = toml::to_string_pretty(&settings).unwrap();
        assert!(!saved.contains("axis_ramp"));

        let settings: Settings = toml::from_str(
            r#"
            [input.axis_ramp]
            gravity = 6.0
            "#,
        )
        .unwrap();
        let ramp = settings.input.axis_ramp.unwrap();
        assert_eq!(ramp.gravity, 6.0);
        assert_eq!(ramp.sensitivity, AxisRamp::default().sensitivity);
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("freelook-settings-{}", std::process::id()));
        let path = dir.join("settings.toml");

        let mut settings = Settings::default();
        settings.input.invert_y = true;
        settings.controls.rotation_speed = 3.5;
        settings.input.axis_ramp = Some(AxisRamp::default());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert!(loaded.input.invert_y);
        assert_eq!(loaded.input.axis_ramp, Some(AxisRamp::default()));
        assert_eq!(loaded.controls, settings.controls);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("freelook-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        fs::write(&path, "video = [not toml").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.video.fov, 60.0);

        fs::remove_dir_all(&dir).unwrap();
    }
}
