//! Freelook Rig - First-person camera rig
//!
//! Maps per-frame input to an actor's transform and camera: mouse look,
//! planar movement, sprint with a field-of-view kick, and a double-click
//! toggle for cursor capture.

pub mod error;
pub mod input;
pub mod rig;
pub mod sink;

pub use error::{ConfigError, RigError};
pub use input::{
    AxisRamp, InputAction, InputBinding, InputBindings, InputHandler, InputSnapshot,
    InputState,
};
pub use rig::{FirstPersonCameraController, RigConfig, RigFrame, RigState, PITCH_MAX, PITCH_MIN};
pub use sink::{CameraSink, CursorSink, TransformSink};
