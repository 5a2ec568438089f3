//! Freelook Core - Core types and utilities for the freelook camera rig
//!
//! This crate provides the foundational types the rig writes into:
//! - Mathematical primitives (re-exported from glam)
//! - Transform component for actor positioning
//! - Camera holding the live field of view
//! - Frame clock for wall-clock time and clamped delta

pub mod time;
pub mod types;

pub use glam::{EulerRot, Quat, Vec2, Vec3};
pub use time::{FrameClock, TimeConfig};
pub use types::{Camera, Transform};
