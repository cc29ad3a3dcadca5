//! The fixed 3+1 gravitational system and its integration entry point.

use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::error::IntegrationError;
use crate::gravity;
use crate::ode::{Dopri5, OdeSystem, Tolerances};
use crate::trajectory::{BodyState, Trajectory};

/// Number of bodies: three radiators plus the dependent body.
pub const BODY_COUNT: usize = 4;

/// Dimension of the first-order state vector: 8 position components
/// followed by 8 velocity components.
pub const STATE_DIM: usize = 4 * BODY_COUNT;

/// Three radiators and one dependent body under full mutual gravity.
///
/// The dependent body's mass perturbs the radiators: this is the full
/// four-body problem, not a restricted model with a massless test
/// particle. The body set is fixed for the lifetime of the system and
/// masses never change.
#[derive(Debug, Clone)]
pub struct FourBodySystem {
    bodies: [Body; BODY_COUNT],
    masses: [f64; BODY_COUNT],
}

impl FourBodySystem {
    /// Builds the system from three radiators and the dependent body.
    ///
    /// Bodies carry their own validation (`Body::new`), so any set of
    /// constructed bodies forms a valid system.
    pub fn new(radiators: [Body; 3], dependent: Body) -> Self {
        let [a, b, c] = radiators;
        let bodies = [a, b, c, dependent];
        let masses = [
            bodies[0].mass,
            bodies[1].mass,
            bodies[2].mass,
            bodies[3].mass,
        ];
        Self { bodies, masses }
    }

    /// All four bodies: radiators in order, dependent body last.
    pub fn bodies(&self) -> &[Body; BODY_COUNT] {
        &self.bodies
    }

    pub fn radiators(&self) -> &[Body] {
        &self.bodies[..3]
    }

    pub fn dependent(&self) -> &Body {
        &self.bodies[3]
    }

    pub fn total_momentum(&self) -> Vector2<f64> {
        gravity::total_momentum(&self.bodies)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        gravity::potential_energy(&self.bodies)
    }

    /// Packs the current state as positions then velocities.
    pub fn state_vector(&self) -> [f64; STATE_DIM] {
        let mut y = [0.0; STATE_DIM];
        for (i, body) in self.bodies.iter().enumerate() {
            y[2 * i] = body.position.x;
            y[2 * i + 1] = body.position.y;
            y[2 * BODY_COUNT + 2 * i] = body.velocity.x;
            y[2 * BODY_COUNT + 2 * i + 1] = body.velocity.y;
        }
        y
    }

    /// Integrates over `[t0, t1]`, sampling the solution exactly at
    /// `t_eval`.
    ///
    /// `t_eval` must be strictly increasing and contained in the span.
    /// The returned trajectory is owned by the caller; the system's own
    /// state is not advanced and nothing is cached internally. Before
    /// returning, every sample is checked for non-finite values so a
    /// close encounter surfaces as an error rather than as garbage
    /// coordinates.
    pub fn integrate(
        &self,
        t0: f64,
        t1: f64,
        t_eval: &[f64],
        tol: Tolerances,
    ) -> Result<Trajectory, IntegrationError> {
        if t1 < t0 || t_eval.last().is_some_and(|&te| te > t1) {
            return Err(IntegrationError::BadTimeGrid);
        }

        let mut solver = Dopri5::new(tol);
        let states = solver.integrate_dense(self, t0, &self.state_vector(), t_eval)?;

        let samples: Vec<[BodyState; BODY_COUNT]> = states.iter().map(unpack).collect();
        for (idx, sample) in samples.iter().enumerate() {
            if !sample.iter().all(BodyState::is_finite) {
                return Err(IntegrationError::NonFiniteState { time: t_eval[idx] });
            }
        }

        Ok(Trajectory::new(t_eval.to_vec(), samples))
    }
}

impl OdeSystem<STATE_DIM> for FourBodySystem {
    fn rhs(&self, _t: f64, y: &[f64; STATE_DIM], dydt: &mut [f64; STATE_DIM]) {
        let positions: [Point2<f64>; BODY_COUNT] =
            std::array::from_fn(|i| Point2::new(y[2 * i], y[2 * i + 1]));

        // d(position)/dt = velocity
        dydt[..2 * BODY_COUNT].copy_from_slice(&y[2 * BODY_COUNT..]);

        // d(velocity)/dt = mutual gravitational acceleration
        for i in 0..BODY_COUNT {
            let a = gravity::acceleration(i, &positions, &self.masses);
            dydt[2 * BODY_COUNT + 2 * i] = a.x;
            dydt[2 * BODY_COUNT + 2 * i + 1] = a.y;
        }
    }
}

fn unpack(y: &[f64; STATE_DIM]) -> [BodyState; BODY_COUNT] {
    std::array::from_fn(|i| BodyState {
        position: Point2::new(y[2 * i], y[2 * i + 1]),
        velocity: Vector2::new(y[2 * BODY_COUNT + 2 * i], y[2 * BODY_COUNT + 2 * i + 1]),
    })
}
