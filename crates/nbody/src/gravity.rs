//! Direct mutual Newtonian gravity for small systems.
//!
//! Every body accelerates every other body; there is no central-mass
//! special case and no test-particle approximation. No softening is
//! applied either: if two bodies approach coincidence the acceleration
//! is genuinely unbounded, and the integrator surfaces that as a
//! divergence instead of papering over it.

use nalgebra::{Point2, Vector2};

use crate::body::Body;

/// Gravitational constant in m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67430e-11;

/// Acceleration on the body at `idx` from every other body.
///
/// # Arguments
///
/// * `idx` - Index of the accelerated body
/// * `positions` - Positions in meters, one per body
/// * `masses` - Masses in kilograms, parallel to `positions`
///
/// # Returns
///
/// Acceleration vector in m/s²
pub fn acceleration(idx: usize, positions: &[Point2<f64>], masses: &[f64]) -> Vector2<f64> {
    let here = positions[idx].coords;
    positions
        .iter()
        .zip(masses.iter())
        .enumerate()
        .filter(|(j, _)| *j != idx)
        .map(|(_, (other, mass))| {
            let dr = other.coords - here;
            let r2 = dr.magnitude_squared();
            let r = r2.sqrt();
            dr * (G * mass / (r2 * r))
        })
        .fold(Vector2::zeros(), |acc, a| acc + a)
}

/// Total gravitational potential energy, each pair counted once.
///
/// # Returns
///
/// Potential energy in joules (always negative for separated bodies)
pub fn potential_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            bodies[i + 1..].iter().map(move |b| {
                let r = (a.position.coords - b.position.coords).magnitude();
                -G * a.mass * b.mass / r
            })
        })
        .sum()
}

/// Total momentum of the bodies.
///
/// Conserved exactly for a closed system; useful for checking numerical
/// drift after integration.
pub fn total_momentum(bodies: &[Body]) -> Vector2<f64> {
    bodies
        .iter()
        .map(Body::momentum)
        .fold(Vector2::zeros(), |acc, p| acc + p)
}
