//! Collaborators the rig writes into
//!
//! The rig never owns the camera, transform, or cursor. The host hands them
//! in on every tick through these traits.

use freelook_core::{Camera, Transform, Vec3};
use tracing::warn;
use winit::window::{CursorGrabMode, Window};

/// Something with a mutable field of view, in degrees
pub trait CameraSink {
    fn fov(&self) -> f32;
    fn set_fov(&mut self, fov: f32);
}

/// The actor's transform
pub trait TransformSink {
    /// Set orientation from pitch and yaw in degrees. Roll is always zero.
    fn set_euler_degrees(&mut self, pitch: f32, yaw: f32);
    /// Move by an offset expressed in the actor's own frame
    fn translate_local(&mut self, offset: Vec3);
}

/// System pointer control
pub trait CursorSink {
    /// `true` locks and hides the pointer, `false` frees and shows it
    fn set_captured(&mut self, captured: bool);
}

impl CameraSink for Camera {
    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }
}

impl TransformSink for Transform {
    fn set_euler_degrees(&mut self, pitch: f32, yaw: f32) {
        self.rotation = Transform::rotation_from_euler_degrees(pitch, yaw);
    }

    fn translate_local(&mut self, offset: Vec3) {
        Transform::translate_local(self, offset);
    }
}

/// Headless cursor that just remembers the last command
impl CursorSink for bool {
    fn set_captured(&mut self, captured: bool) {
        *self = captured;
    }
}

impl CursorSink for Window {
    fn set_captured(&mut self, captured: bool) {
        let result = if captured {
            // Not every platform can lock; confining still keeps the pointer in the window
            self.set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.set_cursor_grab(CursorGrabMode::None)
        };

        if let Err(e) = result {
            warn!("cursor grab request failed: {}", e);
        }
        self.set_cursor_visible(!captured);
    }
}
