//! Heat-emitting massive bodies ("suns").

use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use nbody::Body;

use crate::error::RadiativeError;
use crate::STEFAN_BOLTZMANN;

/// One of the three primary heat-emitting bodies.
///
/// The radius is derived from the body's mass at a fixed mean density,
/// and the photospheric temperature is a constant for the whole run.
/// Both are set once at construction and never evolve; only position
/// and velocity change as the integrator advances the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radiator {
    pub body: Body,
    /// Physical radius in meters.
    pub radius: f64,
    /// Photospheric temperature in Kelvin.
    pub surface_temperature: f64,
}

impl Radiator {
    /// Builds a radiator around an already-validated body.
    ///
    /// # Arguments
    ///
    /// * `body` - The underlying point mass
    /// * `surface_temperature` - Photospheric temperature in Kelvin
    /// * `density` - Mean density in kg/m³ used to derive the radius
    pub fn new(body: Body, surface_temperature: f64, density: f64) -> Result<Self, RadiativeError> {
        if !(surface_temperature > 0.0) || !surface_temperature.is_finite() {
            return Err(RadiativeError::NonPositiveTemperature(surface_temperature));
        }
        if !(density > 0.0) || !density.is_finite() {
            return Err(RadiativeError::NonPositiveDensity(density));
        }
        let radius = radius_from_mass(body.mass, density);
        Ok(Self {
            body,
            radius,
            surface_temperature,
        })
    }

    /// Total radiated power in watts: L = 4π R² σ T⁴.
    pub fn luminosity(&self) -> f64 {
        4.0 * PI * self.radius * self.radius * STEFAN_BOLTZMANN
            * self.surface_temperature.powi(4)
    }

    /// Incident irradiance in W/m² at `point`, by inverse-square
    /// falloff of the luminosity.
    ///
    /// Returns `f64::INFINITY` when `point` coincides with the radiator.
    /// That is a value, not an error; callers guard against it
    /// themselves.
    pub fn irradiance_at(&self, point: Point2<f64>) -> f64 {
        let d2 = (point.coords - self.body.position.coords).magnitude_squared();
        if d2 == 0.0 {
            return f64::INFINITY;
        }
        self.luminosity() / (4.0 * PI * d2)
    }

    /// The same radiator advanced to a trajectory sample.
    ///
    /// Radius and temperature are physical parameters, not state; they
    /// carry over unchanged.
    pub fn moved_to(&self, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            body: Body {
                position,
                velocity,
                ..self.body.clone()
            },
            ..self.clone()
        }
    }
}

/// Radius of a homogeneous sphere of the given mass and mean density:
/// (3M / 4πρ)^(1/3).
pub fn radius_from_mass(mass: f64, density: f64) -> f64 {
    (3.0 * mass / (4.0 * PI * density)).powf(1.0 / 3.0)
}
