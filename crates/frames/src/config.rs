//! Declarative description of a simulation run.
//!
//! A [`SystemConfig`] is the inbound surface: plain serde-friendly
//! numbers that are validated once, when the live bodies are built.
//! The default configuration is a triple-sun scenario that stays bound
//! and keeps the planet's temperature in a habitable-ish band over a
//! one-year window.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use nbody::{Body, FourBodySystem};
use sky::{DependentBody, Radiator, Sky, DEFAULT_RADIATOR_DENSITY, DEFAULT_SURFACE_TEMPERATURE};

use crate::error::ConfigError;

/// Solar mass in kg.
pub const SOLAR_MASS: f64 = 1.989e30;

/// Earth mass in kg.
pub const EARTH_MASS: f64 = 5.972e24;

/// Tangential speed given to the default suns, in m/s. Large enough
/// that the triple stays bound without close encounters over a year.
pub const DEFAULT_TANGENTIAL_SPEED: f64 = 3.5e4;

/// One radiator as configured, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiatorConfig {
    pub name: String,
    /// kg
    pub mass: f64,
    /// m
    pub position: [f64; 2],
    /// m/s
    pub velocity: [f64; 2],
    /// K
    pub surface_temperature: f64,
    /// kg/m³, used to derive the radius from the mass.
    pub density: f64,
}

impl RadiatorConfig {
    pub fn build(&self) -> Result<Radiator, ConfigError> {
        let body = Body::new(
            self.name.clone(),
            self.mass,
            Point2::new(self.position[0], self.position[1]),
            Vector2::new(self.velocity[0], self.velocity[1]),
        )?;
        Ok(Radiator::new(body, self.surface_temperature, self.density)?)
    }
}

/// The dependent body as configured, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetConfig {
    pub name: String,
    /// kg
    pub mass: f64,
    /// m
    pub position: [f64; 2],
    /// m/s
    pub velocity: [f64; 2],
    /// Fraction of incident power reflected, in [0, 1].
    pub albedo: f64,
}

impl PlanetConfig {
    pub fn build(&self) -> Result<DependentBody, ConfigError> {
        let body = Body::new(
            self.name.clone(),
            self.mass,
            Point2::new(self.position[0], self.position[1]),
            Vector2::new(self.velocity[0], self.velocity[1]),
        )?;
        Ok(DependentBody::new(body, self.albedo)?)
    }
}

/// Full description of one simulated system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfig {
    pub radiators: [RadiatorConfig; 3],
    pub planet: PlanetConfig,
    /// Seed for the fallback visibility streams.
    pub seed: u64,
}

impl SystemConfig {
    /// Builds the three radiators in configuration order.
    pub fn build_radiators(&self) -> Result<[Radiator; 3], ConfigError> {
        let [a, b, c] = &self.radiators;
        Ok([a.build()?, b.build()?, c.build()?])
    }

    pub fn build_planet(&self) -> Result<DependentBody, ConfigError> {
        self.planet.build()
    }

    /// Builds the fallback-visibility sky seeded from this
    /// configuration, for consumers that have no integrated geometry.
    pub fn build_sky(&self) -> Sky {
        Sky::new(self.seed)
    }

    /// Builds the gravitational system the sampler integrates.
    pub fn build_system(&self) -> Result<FourBodySystem, ConfigError> {
        let radiators = self.build_radiators()?;
        let planet = self.build_planet()?;
        Ok(FourBodySystem::new(
            radiators.map(|r| r.body),
            planet.body,
        ))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        let sun = |name: &str, position: [f64; 2]| RadiatorConfig {
            name: name.to_string(),
            mass: SOLAR_MASS,
            position,
            velocity: tangential(position, DEFAULT_TANGENTIAL_SPEED),
            surface_temperature: DEFAULT_SURFACE_TEMPERATURE,
            density: DEFAULT_RADIATOR_DENSITY,
        };
        Self {
            radiators: [
                sun("Sun A", [0.0, 3.0e11]),
                sun("Sun B", [1.5e11, -1.5e11]),
                sun("Sun C", [-1.5e11, -1.5e11]),
            ],
            planet: PlanetConfig {
                name: "Planet".to_string(),
                mass: EARTH_MASS,
                position: [0.0, 0.0],
                velocity: [0.0, 0.0],
                albedo: 0.5,
            },
            seed: 0,
        }
    }
}

/// Velocity of magnitude `speed` perpendicular to `position`,
/// counter-clockwise about the origin.
fn tangential(position: [f64; 2], speed: f64) -> [f64; 2] {
    let r = (position[0] * position[0] + position[1] * position[1]).sqrt();
    [-position[1] / r * speed, position[0] / r * speed]
}
