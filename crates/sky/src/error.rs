use thiserror::Error;

use nbody::BodyError;

/// Construction-time validation failures for radiative profiles.
///
/// Like mass positivity, these are rejected when the profile is built
/// and never deferred to the point where power is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadiativeError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error("surface temperature must be positive kelvin, got {0}")]
    NonPositiveTemperature(f64),
    #[error("mean density must be positive, got {0} kg/m³")]
    NonPositiveDensity(f64),
    #[error("albedo must lie in [0, 1], got {0}")]
    AlbedoOutOfRange(f64),
}
