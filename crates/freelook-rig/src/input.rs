//! Input system with action-based mapping
//!
//! Folds raw window events into an [`InputState`] and freezes it into an
//! [`InputSnapshot`] once per frame for the rig to consume.

use std::collections::{HashMap, HashSet};

use freelook_core::FrameClock;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions the rig reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Strafe left (A by default)
    MoveLeft,
    /// Strafe right (D by default)
    MoveRight,
    /// Sprint modifier (Shift by default)
    Sprint,
    /// Primary pointer button (left mouse button by default)
    Primary,
}

/// Everything the rig reads in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Primary button presses since the previous tick
    pub primary_presses: u32,
    /// Pointer motion this frame, +Y is up
    pub pointer_delta: Vec2,
    /// Strafe on X, forward/back on Y, nominally in [-1, 1]
    pub move_axes: Vec2,
    pub sprint_held: bool,
    /// Wall-clock time in seconds
    pub now: f64,
    /// Seconds since the previous tick
    pub delta_time: f32,
}

impl InputSnapshot {
    /// Primary button went down at least once this frame
    pub fn primary_pressed(&self) -> bool {
        self.primary_presses > 0
    }
}

/// Unity-style analog ramp for digital movement keys
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisRamp {
    /// Units per second the axis moves toward a held direction
    pub sensitivity: f32,
    /// Units per second the axis falls back to zero when released
    pub gravity: f32,
}

impl Default for AxisRamp {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
        }
    }
}

fn move_towards(current: f32, target: f32, max_step: f32) -> f32 {
    if (target - current).abs() <= max_step {
        target
    } else {
        current + (target - current).signum() * max_step
    }
}

impl AxisRamp {
    /// Move `current` one frame closer to the digital `target`
    pub fn advance(&self, current: f32, target: f32, dt: f32) -> f32 {
        if target == 0.0 {
            return move_towards(current, 0.0, self.gravity * dt);
        }
        // Reversing direction snaps through zero
        let start = if current * target < 0.0 { 0.0 } else { current };
        move_towards(start, target, self.sensitivity * dt)
    }
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Press edges per action this frame
    pub presses: HashMap<InputAction, u32>,
    /// Pointer movement accumulated this frame (+Y up)
    pub pointer_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// How many times an action went down this frame
    pub fn press_count(&self, action: InputAction) -> u32 {
        self.presses.get(&action).copied().unwrap_or(0)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.press_count(action) > 0
    }

    /// Digital axis: +1 for `positive`, -1 for `negative`, 0 for both or neither
    pub fn axis(&self, positive: InputAction, negative: InputAction) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Digital movement axes, strafe on X and forward on Y
    pub fn move_axes(&self) -> Vec2 {
        Vec2::new(
            self.axis(InputAction::MoveRight, InputAction::MoveLeft),
            self.axis(InputAction::MoveForward, InputAction::MoveBackward),
        )
    }

    /// Freeze this frame's input together with the clock's timing
    pub fn snapshot(&self, clock: &FrameClock) -> InputSnapshot {
        InputSnapshot {
            primary_presses: self.press_count(InputAction::Primary),
            pointer_delta: self.pointer_delta,
            move_axes: self.move_axes(),
            sprint_held: self.is_held(InputAction::Sprint),
            now: clock.now(),
            delta_time: clock.delta_time,
        }
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.presses.clear();
        self.pointer_delta = Vec2::ZERO;
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.held.clear();
        self.clear_frame();
    }
}

/// Binding of a physical key to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    Key(KeyCode),
    /// Mouse button: 0 = left, 1 = right, 2 = middle
    Mouse(u32),
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

/// Maps physical inputs to actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputBinding, InputAction>,
    /// Reverse lookup: action to all bindings
    reverse: HashMap<InputAction, Vec<InputBinding>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::ShiftRight, InputAction::Sprint);
        bindings.bind_mouse(0, InputAction::Primary);

        bindings
    }
}

impl InputBindings {
    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.insert(InputBinding::Key(key), action);
    }

    /// Bind a mouse button to an action
    pub fn bind_mouse(&mut self, button: u32, action: InputAction) {
        self.insert(InputBinding::Mouse(button), action);
    }

    fn insert(&mut self, binding: InputBinding, action: InputAction) {
        if let Some(previous) = self.bindings.insert(binding, action) {
            if let Some(list) = self.reverse.get_mut(&previous) {
                list.retain(|b| *b != binding);
            }
        }
        self.reverse.entry(action).or_default().push(binding);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        let binding = InputBinding::Key(key);
        if let Some(action) = self.bindings.remove(&binding) {
            if let Some(list) = self.reverse.get_mut(&action) {
                list.retain(|b| *b != binding);
            }
        }
    }

    /// Get the action for a binding, if any
    pub fn get_action(&self, binding: &InputBinding) -> Option<InputAction> {
        self.bindings.get(binding).copied()
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.get_action(&InputBinding::Key(key))
    }

    /// All bindings that trigger an action
    pub fn bindings_for(&self, action: InputAction) -> &[InputBinding] {
        self.reverse.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    pub bindings: InputBindings,
    /// Multiplier applied to raw pointer motion
    pub mouse_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
    /// Ramp movement axes instead of snapping them, `None` for digital keys
    pub axis_ramp: Option<AxisRamp>,
    /// Ramped axes carried between frames
    ramped_axes: Vec2,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
            mouse_sensitivity: 1.0,
            invert_y: false,
            axis_ramp: None,
            ramped_axes: Vec2::ZERO,
        }
    }

    fn apply(&mut self, action: InputAction, element_state: ElementState) {
        match element_state {
            ElementState::Pressed => {
                // Key repeat arrives as extra presses; only the first is an edge
                if !self.state.held.contains(&action) {
                    *self.state.presses.entry(action).or_default() += 1;
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
            }
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_key_action(key_code) {
                self.apply(action, element_state);
            }
        }
    }

    /// Handle a mouse button event
    pub fn handle_mouse_button(&mut self, button: MouseButton, element_state: ElementState) {
        let button_id = match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(id) => id as u32,
        };

        if let Some(action) = self.bindings.get_action(&InputBinding::Mouse(button_id)) {
            self.apply(action, element_state);
        }
    }

    /// Handle raw mouse motion. Window motion is +Y down; state is +Y up.
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        let y_mult = if self.invert_y { 1.0 } else { -1.0 };
        self.state.pointer_delta += Vec2::new(
            delta.0 as f32 * self.mouse_sensitivity,
            delta.1 as f32 * self.mouse_sensitivity * y_mult,
        );
    }

    /// Snapshot the current frame, advancing ramped axes by the clock's delta
    pub fn snapshot(&mut self, clock: &FrameClock) -> InputSnapshot {
        let mut snapshot = self.state.snapshot(clock);
        if let Some(ramp) = self.axis_ramp {
            let target = snapshot.move_axes;
            let dt = clock.delta_time;
            self.ramped_axes = Vec2::new(
                ramp.advance(self.ramped_axes.x, target.x, dt),
                ramp.advance(self.ramped_axes.y, target.y, dt),
            );
            snapshot.move_axes = self.ramped_axes;
        }
        snapshot
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }

    /// Drop everything held, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.clear_all();
        self.ramped_axes = Vec2::ZERO;
    }
}
