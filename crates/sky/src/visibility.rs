//! Line-of-sight visibility of radiators from the dependent body.
//!
//! Two incompatible policies coexist deliberately, selected explicitly
//! at construction so a caller is never surprised which one answers:
//!
//! * **Physical** — a hemisphere test against a fixed "up" axis: a
//!   radiator is visible iff its y-coordinate strictly exceeds the
//!   dependent body's. This is a coarse, documented simplification:
//!   no occlusion by other bodies, no horizon curvature, no rotation
//!   of the dependent body.
//! * **Seeded fallback** — a deterministic Bernoulli(0.5) stream keyed
//!   by a seed, for lightweight tests and environments where physical
//!   geometry is not wired in yet. Same seed, same sequence.

use nalgebra::{Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Which rule answers visibility queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityPolicy {
    /// Geometry decides: hemisphere test along the y axis.
    Physical,
    /// Seeded coin flips, independent of geometry.
    SeededFallback { seed: u64 },
}

/// Hemisphere visibility test used by the physical policy.
///
/// `radiator` is visible from `observer` iff its y-coordinate strictly
/// exceeds the observer's.
pub fn is_visible(radiator: Point2<f64>, observer: Point2<f64>) -> bool {
    radiator.y > observer.y
}

/// A per-radiator view answering visibility and distance queries.
///
/// The variant is fixed at construction: [`Orbit::physical`] wraps a
/// position/velocity snapshot, [`Orbit::seeded_fallback`] wraps only a
/// deterministic random stream.
#[derive(Debug, Clone)]
pub enum Orbit {
    Physical {
        name: String,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    },
    SeededFallback {
        name: String,
        seed: u64,
        rng: ChaChaRng,
    },
}

impl Orbit {
    /// Visibility from real geometry.
    pub fn physical(
        name: impl Into<String>,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        Orbit::Physical {
            name: name.into(),
            position,
            velocity,
        }
    }

    /// Visibility from a deterministic pseudo-random stream.
    pub fn seeded_fallback(name: impl Into<String>, seed: u64) -> Self {
        Orbit::SeededFallback {
            name: name.into(),
            seed,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Orbit::Physical { name, .. } | Orbit::SeededFallback { name, .. } => name,
        }
    }

    /// Position snapshot, when geometry is available.
    pub fn position(&self) -> Option<Point2<f64>> {
        match self {
            Orbit::Physical { position, .. } => Some(*position),
            Orbit::SeededFallback { .. } => None,
        }
    }

    /// Velocity snapshot, when geometry is available.
    pub fn velocity(&self) -> Option<Vector2<f64>> {
        match self {
            Orbit::Physical { velocity, .. } => Some(*velocity),
            Orbit::SeededFallback { .. } => None,
        }
    }

    pub fn policy(&self) -> VisibilityPolicy {
        match self {
            Orbit::Physical { .. } => VisibilityPolicy::Physical,
            Orbit::SeededFallback { seed, .. } => {
                VisibilityPolicy::SeededFallback { seed: *seed }
            }
        }
    }

    /// Whether this orbit's body is visible from `observer`.
    ///
    /// Physical mode is pure and repeatable for fixed positions;
    /// fallback mode draws the next Bernoulli(0.5) sample from the
    /// seeded stream, advancing it.
    pub fn is_visible_from(&mut self, observer: Point2<f64>) -> bool {
        match self {
            Orbit::Physical { position, .. } => is_visible(*position, observer),
            Orbit::SeededFallback { rng, .. } => rng.gen_bool(0.5),
        }
    }

    /// Distance to `point` in meters, when geometry is available.
    pub fn distance_to(&self, point: Point2<f64>) -> Option<f64> {
        match self {
            Orbit::Physical { position, .. } => {
                Some((position.coords - point.coords).magnitude())
            }
            Orbit::SeededFallback { .. } => None,
        }
    }
}

/// The three named suns of the fallback sky.
///
/// Orbits A, B and C are seeded `seed + 1`, `seed + 2` and `seed + 3`
/// so each sun draws from an independent stream.
#[derive(Debug, Clone)]
pub struct Sky {
    orbits: [Orbit; 3],
}

impl Sky {
    pub fn new(seed: u64) -> Self {
        let names = ["A", "B", "C"];
        Self {
            orbits: std::array::from_fn(|i| {
                Orbit::seeded_fallback(names[i], seed + 1 + i as u64)
            }),
        }
    }

    /// Visibility of suns A, B and C at `time`.
    ///
    /// The fallback streams ignore the time value itself; they advance
    /// one draw per query, so a fixed seed yields a reproducible
    /// sequence of triples.
    pub fn visibility_at(&mut self, _time: f64) -> [bool; 3] {
        let origin = Point2::origin();
        std::array::from_fn(|i| self.orbits[i].is_visible_from(origin))
    }
}
