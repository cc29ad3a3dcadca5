//! Immutable time-sampled integration output.

use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Position and velocity of one body at one sample time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyState {
    pub position: Point2<f64>,  // m
    pub velocity: Vector2<f64>, // m/s
}

impl BodyState {
    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.velocity.x.is_finite()
            && self.velocity.y.is_finite()
    }
}

/// The output of one integration run.
///
/// Samples are ordered by strictly increasing time and never mutated
/// after construction. A trajectory is owned by whoever requested the
/// integration; [`crate::FourBodySystem`] keeps no copy and no cache.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    times: Vec<f64>,
    samples: Vec<[BodyState; 4]>,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, samples: Vec<[BodyState; 4]>) -> Self {
        debug_assert_eq!(times.len(), samples.len());
        Self { times, samples }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times in seconds; identical to the `t_eval` grid the
    /// integration was requested with.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn time(&self, sample: usize) -> f64 {
        self.times[sample]
    }

    /// All four body states at a sample: radiators first, then the
    /// dependent body.
    pub fn sample(&self, sample: usize) -> &[BodyState; 4] {
        &self.samples[sample]
    }

    /// The three radiator states at a sample, in construction order.
    pub fn radiator_states(&self, sample: usize) -> &[BodyState] {
        &self.samples[sample][..3]
    }

    /// The dependent body's state at a sample.
    pub fn dependent_state(&self, sample: usize) -> &BodyState {
        &self.samples[sample][3]
    }

    pub fn is_finite(&self) -> bool {
        self.samples.iter().flatten().all(BodyState::is_finite)
    }
}
