//! Rig state and the per-frame step

use glam::Vec3;

use super::config::{RigConfig, PITCH_MAX, PITCH_MIN};
use crate::input::InputSnapshot;

/// Everything the rig remembers between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    /// Accumulated yaw in degrees, positive turns right
    pub yaw: f32,
    /// Accumulated pitch in degrees, positive looks down, kept in [-90, 90]
    pub pitch: f32,
    /// Pointer locked and hidden, mouse drives rotation
    pub cursor_captured: bool,
    /// Time of the last primary press, `None` before the first one
    pub last_click: Option<f64>,
    base_fov: f32,
    /// Live field of view written to the camera
    pub current_fov: f32,
}

/// Result of one step: the next state and what to write to the sinks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigFrame {
    pub state: RigState,
    /// New capture state, only when it flipped this frame
    pub capture_changed: Option<bool>,
    /// `(pitch, yaw)` in degrees, only while captured
    pub orientation: Option<(f32, f32)>,
    /// Local-space offset for this frame, already scaled by delta time
    pub translation: Vec3,
    pub fov: f32,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl RigState {
    /// Fresh state around a camera's field of view
    pub fn new(base_fov: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            cursor_captured: false,
            last_click: None,
            base_fov,
            current_fov: base_fov,
        }
    }

    /// The field of view the camera had when the rig attached
    pub fn base_fov(&self) -> f32 {
        self.base_fov
    }

    /// Advance one frame. Pure: `self` is left untouched.
    pub fn step(&self, config: &RigConfig, input: &InputSnapshot) -> RigFrame {
        let mut next = *self;

        // Capture toggle. Every press inside the window flips, not just pairs.
        for _ in 0..input.primary_presses {
            if let Some(last) = next.last_click {
                if input.now - last < config.double_click_window {
                    next.cursor_captured = !next.cursor_captured;
                }
            }
            next.last_click = Some(input.now);
        }
        let capture_changed =
            (next.cursor_captured != self.cursor_captured).then_some(next.cursor_captured);

        // Reads the flag written above, so a toggle takes effect this frame
        let orientation = if next.cursor_captured {
            next.yaw += input.pointer_delta.x * config.rotation_speed;
            next.pitch = (next.pitch - input.pointer_delta.y * config.rotation_speed)
                .clamp(PITCH_MIN, PITCH_MAX);
            Some((next.pitch, next.yaw))
        } else {
            None
        };

        // Local frame is -Z forward
        let mut displacement = Vec3::new(
            input.move_axes.x * config.movement_speed,
            0.0,
            -input.move_axes.y * config.movement_speed,
        );

        let target_fov = if input.sprint_held {
            displacement *= config.sprint_movement_multiplier;
            self.base_fov * config.sprint_fov_multiplier
        } else {
            self.base_fov
        };

        let blend = (input.delta_time * config.fov_blend_rate).clamp(0.0, 1.0);
        next.current_fov = lerp(self.current_fov, target_fov, blend);

        RigFrame {
            state: next,
            capture_changed,
            orientation,
            translation: displacement * input.delta_time,
            fov: next.current_fov,
        }
    }
}
