use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::BodyError;

/// A point-mass participant in the simulation.
///
/// All quantities are SI: kilograms, meters, meters per second. The name
/// is a diagnostic label and carries no identity semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub mass: f64,              // kg
    pub position: Point2<f64>,  // m
    pub velocity: Vector2<f64>, // m/s
}

impl Body {
    /// Creates a body, validating its physical parameters.
    ///
    /// Mass must be strictly positive and finite, and every vector
    /// component finite. Both are construction-time invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use nbody::Body;
    ///
    /// let earth = Body::new(
    ///     "earth",
    ///     5.972e24,
    ///     Point2::new(1.496e11, 0.0),
    ///     Vector2::new(0.0, 2.978e4),
    /// )
    /// .unwrap();
    /// assert_eq!(earth.mass, 5.972e24);
    ///
    /// assert!(Body::new("bad", -1.0, Point2::origin(), Vector2::zeros()).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<Self, BodyError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(BodyError::NonPositiveMass(mass));
        }
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(BodyError::NonFiniteVector("position"));
        }
        if !velocity.x.is_finite() || !velocity.y.is_finite() {
            return Err(BodyError::NonFiniteVector("velocity"));
        }
        Ok(Body {
            name: name.into(),
            mass,
            position,
            velocity,
        })
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position.coords - other.position.coords).magnitude()
    }
}
