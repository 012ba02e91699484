use thiserror::Error;

/// Failures surfaced by the idea form. Both are recovered locally and shown
/// inline; neither is retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdeaError {
    #[error("please fill out both fields: business type and goal")]
    Validation,
    #[error("we couldn't generate ideas at this moment, please try again later")]
    Service,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{key}` expects a number, got {raw:?}")]
    NotANumber { key: String, raw: String },
    #[error("`{key}` out of range: {value}")]
    OutOfRange { key: &'static str, value: f64 },
    #[error("unknown particle preset {0:?}")]
    UnknownPreset(String),
}
