/// Errors raised by `RigConfig::validate`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("double-click window must be positive, got {0}")]
    DoubleClickWindow(f64),
}

/// Errors that can occur while attaching the rig to an actor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RigError {
    #[error("no camera attached; wire a camera to the rig before the first update")]
    MissingCamera,

    #[error("camera field of view must be finite and positive, got {0}")]
    InvalidFov(f32),

    #[error("invalid rig configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
