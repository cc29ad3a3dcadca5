//! The body whose thermal state is derived from the radiators.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use nbody::Body;

use crate::error::RadiativeError;
use crate::radiator::Radiator;
use crate::STEFAN_BOLTZMANN;

/// The dependent body ("planet"): gravitationally coupled to the
/// radiators, with an albedo controlling how much of their power it
/// absorbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentBody {
    pub body: Body,
    /// Fraction of incident power reflected rather than absorbed, in
    /// [0, 1].
    pub albedo: f64,
}

impl DependentBody {
    pub fn new(body: Body, albedo: f64) -> Result<Self, RadiativeError> {
        if !(0.0..=1.0).contains(&albedo) {
            return Err(RadiativeError::AlbedoOutOfRange(albedo));
        }
        Ok(Self { body, albedo })
    }

    /// Black-body equilibrium temperature in Kelvin under the given
    /// radiators.
    ///
    /// Sums incident irradiance at this body's position, keeps the
    /// absorbed fraction `1 − albedo`, and solves σT⁴ = absorbed. A
    /// degenerate non-positive absorbed power clamps to 0 K rather than
    /// producing a NaN; a radiator coinciding with this body yields
    /// infinite irradiance and therefore an infinite temperature, which
    /// callers treat like any other infinity.
    pub fn equilibrium_temperature(&self, radiators: &[Radiator]) -> f64 {
        let absorbing = 1.0 - self.albedo;
        if absorbing <= 0.0 {
            return 0.0;
        }
        let incident: f64 = radiators
            .iter()
            .map(|r| r.irradiance_at(self.body.position))
            .sum();
        let absorbed = absorbing * incident;
        if absorbed <= 0.0 {
            return 0.0;
        }
        (absorbed / STEFAN_BOLTZMANN).powf(0.25)
    }

    /// The same body advanced to a trajectory sample.
    pub fn moved_to(&self, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            body: Body {
                position,
                velocity,
                ..self.body.clone()
            },
            albedo: self.albedo,
        }
    }
}
