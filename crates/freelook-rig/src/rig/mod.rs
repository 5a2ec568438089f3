//! Camera rig module
//!
//! First-person mouse look, planar movement, and sprint field-of-view blend.

mod config;
mod controller;
mod state;

pub use config::{RigConfig, PITCH_MAX, PITCH_MIN};
pub use controller::FirstPersonCameraController;
pub use state::{RigFrame, RigState};
