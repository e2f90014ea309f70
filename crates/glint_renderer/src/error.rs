//! Errors raised while assembling a scene or configuring a render.
//!
//! A missed ray is not an error; intersection routines return `None`.

use glint_math::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be at least 2")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error("Degenerate {primitive}: {reason}")]
    DegenerateGeometry {
        primitive: &'static str,
        reason: String,
    },

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

pub type RenderResult<T> = Result<T, RenderError>;

impl RenderError {
    pub(crate) fn degenerate(primitive: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            primitive,
            reason: reason.into(),
        }
    }
}
