//! First-person camera controller

use tracing::debug;

use super::{RigConfig, RigFrame, RigState};
use crate::error::RigError;
use crate::input::InputSnapshot;
use crate::sink::{CameraSink, CursorSink, TransformSink};

/// First-person camera rig attached to one actor
#[derive(Debug, Clone)]
pub struct FirstPersonCameraController {
    /// Configuration
    pub config: RigConfig,
    state: RigState,
}

impl FirstPersonCameraController {
    /// Attach the rig to an actor, reading the camera's field of view once.
    ///
    /// The captured value becomes the base field of view for the rig's whole
    /// lifetime. Fails if there is no camera, the camera's field of view is
    /// unusable, or the config doesn't validate.
    pub fn attach(config: RigConfig, camera: Option<&dyn CameraSink>) -> Result<Self, RigError> {
        config.validate()?;

        let camera = camera.ok_or(RigError::MissingCamera)?;
        let base_fov = camera.fov();
        if !base_fov.is_finite() || base_fov <= 0.0 {
            return Err(RigError::InvalidFov(base_fov));
        }

        debug!(base_fov, "camera rig attached");
        Ok(Self {
            config,
            state: RigState::new(base_fov),
        })
    }

    pub fn state(&self) -> &RigState {
        &self.state
    }

    pub fn base_fov(&self) -> f32 {
        self.state.base_fov()
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.state.cursor_captured
    }

    /// Run one frame and write the results to the actor's collaborators
    pub fn tick<C, T, K>(
        &mut self,
        input: &InputSnapshot,
        camera: &mut C,
        transform: &mut T,
        cursor: &mut K,
    ) -> RigFrame
    where
        C: CameraSink + ?Sized,
        T: TransformSink + ?Sized,
        K: CursorSink + ?Sized,
    {
        let frame = self.state.step(&self.config, input);

        if let Some(captured) = frame.capture_changed {
            debug!(captured, now = input.now, "cursor capture toggled");
            cursor.set_captured(captured);
        }

        if let Some((pitch, yaw)) = frame.orientation {
            transform.set_euler_degrees(pitch, yaw);
        }

        camera.set_fov(frame.fov);
        transform.translate_local(frame.translation);

        self.state = frame.state;
        frame
    }

    /// Free the pointer without a double click, e.g. when the window loses focus
    pub fn release_cursor<K: CursorSink + ?Sized>(&mut self, cursor: &mut K) {
        if self.state.cursor_captured {
            debug!("cursor capture released");
            self.state.cursor_captured = false;
            cursor.set_captured(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use freelook_core::{Camera, Transform, Vec2, Vec3};

    /// Records every command the rig sends to the pointer
    #[derive(Default)]
    struct CursorLog(Vec<bool>);

    impl CursorSink for CursorLog {
        fn set_captured(&mut self, captured: bool) {
            self.0.push(captured);
        }
    }

    fn attach(fov: f32) -> FirstPersonCameraController {
        let camera = Camera::with_fov(fov);
        FirstPersonCameraController::attach(RigConfig::default(), Some(&camera))
            .expect("attach with a camera")
    }

    fn click(now: f64) -> InputSnapshot {
        InputSnapshot {
            primary_presses: 1,
            now,
            ..Default::default()
        }
    }

    #[test]
    fn attach_without_camera_fails() {
        let result = FirstPersonCameraController::attach(RigConfig::default(), None);
        assert_eq!(result.unwrap_err(), RigError::MissingCamera);
    }

    #[test]
    fn attach_rejects_unusable_fov() {
        let camera = Camera::with_fov(0.0);
        let result = FirstPersonCameraController::attach(RigConfig::default(), Some(&camera));
        assert_eq!(result.unwrap_err(), RigError::InvalidFov(0.0));
    }

    #[test]
    fn attach_rejects_bad_config() {
        let camera = Camera::default();
        let config = RigConfig {
            double_click_window: -1.0,
            ..Default::default()
        };
        let result = FirstPersonCameraController::attach(config, Some(&camera));
        assert_eq!(
            result.unwrap_err(),
            RigError::InvalidConfig(ConfigError::DoubleClickWindow(-1.0))
        );
    }

    #[test]
    fn attach_reads_base_fov() {
        let rig = attach(60.0);
        assert_eq!(rig.base_fov(), 60.0);
        assert_eq!(rig.state().current_fov, 60.0);
        assert!(!rig.is_cursor_captured());
    }

    #[test]
    fn sprint_scenario_writes_camera() {
        let mut rig = attach(60.0);
        let mut camera = Camera::with_fov(60.0);
        let mut transform = Transform::default();
        let mut cursor = CursorLog::default();

        let input = InputSnapshot {
            sprint_held: true,
            delta_time: 1.0,
            ..Default::default()
        };
        rig.tick(&input, &mut camera, &mut transform, &mut cursor);

        assert!((camera.fov - 72.0).abs() < 1e-4);
        assert_eq!(rig.base_fov(), 60.0);
        assert!(cursor.0.is_empty());
    }

    #[test]
    fn double_click_captures_cursor() {
        let mut rig = attach(60.0);
        let mut camera = Camera::default();
        let mut transform = Transform::default();
        let mut cursor = CursorLog::default();

        rig.tick(&click(0.0), &mut camera, &mut transform, &mut cursor);
        assert!(cursor.0.is_empty());

        rig.tick(&click(0.2), &mut camera, &mut transform, &mut cursor);
        assert_eq!(cursor.0, vec![true]);
        assert!(rig.is_cursor_captured());

        rig.release_cursor(&mut cursor);
        rig.release_cursor(&mut cursor);
        assert_eq!(cursor.0, vec![true, false]);
        assert!(!rig.is_cursor_captured());
    }

    #[test]
    fn movement_follows_facing() {
        let mut rig = attach(60.0);
        let mut camera = Camera::default();
        let mut transform = Transform::default();
        let mut cursor = false;

        rig.tick(&click(0.0), &mut camera, &mut transform, &mut cursor);
        // Capture and turn 90 degrees right in the same frame
        let turn = InputSnapshot {
            pointer_delta: Vec2::new(45.0, 0.0),
            ..click(0.1)
        };
        rig.tick(&turn, &mut camera, &mut transform, &mut cursor);
        assert!(cursor);

        let forward = InputSnapshot {
            move_axes: Vec2::new(0.0, 1.0),
            delta_time: 0.5,
            now: 1.0,
            ..Default::default()
        };
        rig.tick(&forward, &mut camera, &mut transform, &mut cursor);

        assert!((transform.position - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn uncaptured_rig_leaves_orientation_alone() {
        let mut rig = attach(60.0);
        let mut camera = Camera::default();
        let mut transform = Transform::default();
        let mut cursor = false;

        let input = InputSnapshot {
            pointer_delta: Vec2::new(30.0, 30.0),
            delta_time: 0.016,
            ..Default::default()
        };
        rig.tick(&input, &mut camera, &mut transform, &mut cursor);

        assert_eq!(transform.rotation, freelook_core::Quat::IDENTITY);
        assert_eq!(rig.state().yaw, 0.0);
    }
}
