//! Core types used throughout freelook

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform component representing position, rotation, and scale
///
/// Local space is right-handed: +X right, +Y up, -Z forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Build a rotation from pitch and yaw in degrees (roll is always zero).
    ///
    /// Positive yaw turns right, positive pitch looks down.
    pub fn rotation_from_euler_degrees(pitch: f32, yaw: f32) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -yaw.to_radians(),
            -pitch.to_radians(),
            0.0,
        )
    }

    /// Translate by an offset expressed in this transform's own frame
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }
}

/// Camera lens, only the field of view matters to the rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { fov: 60.0 }
    }
}

impl Camera {
    /// Create a camera with the given vertical field of view in degrees
    pub fn with_fov(fov: f32) -> Self {
        Self { fov }
    }
}
