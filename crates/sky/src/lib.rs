//! Radiative and observational layer over the dynamical core.
//!
//! Wraps `nbody` bodies with the physical profiles the simulation
//! derives observables from: radiators ("suns") emit black-body power,
//! the dependent body ("planet") absorbs it, and visibility of each
//! radiator is answered by one of two explicit policies.

pub mod dependent_body;
pub mod error;
pub mod radiator;
pub mod visibility;

#[cfg(test)]
mod dependent_body_test;

pub use dependent_body::DependentBody;
pub use error::RadiativeError;
pub use radiator::Radiator;
pub use visibility::{Orbit, Sky, VisibilityPolicy};

/// Stefan–Boltzmann constant in W m⁻² K⁻⁴.
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Mean density used to derive a radiator's radius from its mass, in
/// kg/m³. Solar mean density, so a solar-mass radiator gets a solar
/// radius.
pub const DEFAULT_RADIATOR_DENSITY: f64 = 1408.0;

/// Default photospheric temperature for radiators, in Kelvin.
pub const DEFAULT_SURFACE_TEMPERATURE: f64 = 5778.0;
