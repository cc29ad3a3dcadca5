use thiserror::Error;

use nbody::{BodyError, IntegrationError};
use sky::RadiativeError;

/// Construction failures when turning a [`crate::SystemConfig`] into
/// live bodies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error(transparent)]
    Radiative(#[from] RadiativeError),
}

/// Failures answering a frame request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("total frame count must be at least 1")]
    EmptyGrid,
    #[error("frame index {frame_index} out of range for {total_frames} frames")]
    IndexOutOfRange {
        frame_index: u32,
        total_frames: u32,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Integration(#[from] IntegrationError),
}
