//! Error types for the punch counter engine.
//!
//! Only construction and input parsing can fail. The per-frame path never
//! returns an error: missing or degenerate landmarks are skipped instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Inverted thresholds: retract_below ({retract_below}°) must be below extend_above ({extend_above}°)")]
    InvertedThresholds { extend_above: f32, retract_below: f32 },

    #[error("Threshold out of range: {name} = {value} (expected a finite angle in [0, 180])")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("Invalid drop margin: {0} (expected a finite, non-negative value)")]
    InvalidDropMargin(f32),

    #[error("Invalid visibility threshold: {0} (expected a value in [0, 1])")]
    InvalidVisibility(f32),

    #[error("Invalid frame window: {name} must be at least 1")]
    ZeroFrameWindow { name: &'static str },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid pose buffer length: {len} (expected 99 or 132)")]
    InvalidPoseBuffer { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
