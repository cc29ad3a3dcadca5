//! Adaptive embedded Runge–Kutta integration.
//!
//! The solver is Dormand–Prince 5(4): a fifth-order explicit method with
//! an embedded fourth-order error estimate, the standard choice for
//! smooth non-stiff systems such as point-mass gravity. Local error is
//! kept below a relative/absolute tolerance by accepting or rejecting
//! each trial step and rescaling the step size.
//!
//! Dense output onto an arbitrary evaluation grid is produced by cubic
//! Hermite interpolation between accepted steps, using the derivative
//! values the method computes anyway at both step endpoints.

use crate::error::IntegrationError;

/// Right-hand side of a first-order ODE system with `N` components.
pub trait OdeSystem<const N: usize> {
    /// Writes dy/dt at `(t, y)` into `dydt`.
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]);
}

/// Relative and absolute local error tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerances {
    /// Tight enough to keep energy drift negligible over a multi-orbit
    /// run.
    fn default() -> Self {
        Self {
            rtol: 1e-9,
            atol: 1e-9,
        }
    }
}

/// Counters describing the work performed by one integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub accepted_steps: usize,
    pub rejected_steps: usize,
    pub rhs_evals: usize,
}

// Dormand-Prince 5(4) tableau (Hairer, Norsett & Wanner, table II.5.2).
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights (also the seventh-stage node: first-same-as-last).
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Difference between the fifth-order and embedded fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

/// Dormand–Prince 5(4) adaptive solver with dense output.
///
/// # Examples
///
/// ```
/// use nbody::ode::{Dopri5, OdeSystem, Tolerances};
///
/// /// y' = -y, solution y(t) = e^(-t)
/// struct Decay;
///
/// impl OdeSystem<1> for Decay {
///     fn rhs(&self, _t: f64, y: &[f64; 1], dydt: &mut [f64; 1]) {
///         dydt[0] = -y[0];
///     }
/// }
///
/// let mut solver = Dopri5::new(Tolerances::default());
/// let samples = solver
///     .integrate_dense(&Decay, 0.0, &[1.0], &[0.5, 1.0])
///     .unwrap();
/// assert!((samples[1][0] - (-1.0f64).exp()).abs() < 1e-8);
/// ```
pub struct Dopri5 {
    pub tol: Tolerances,
    /// Combined budget of accepted and rejected steps.
    pub max_steps: usize,
    pub stats: SolverStats,
}

impl Dopri5 {
    pub fn new(tol: Tolerances) -> Self {
        Self {
            tol,
            max_steps: 100_000,
            stats: SolverStats::default(),
        }
    }

    /// Integrates from `(t0, y0)` and samples the solution at every
    /// point of `t_eval`.
    ///
    /// `t_eval` must be strictly increasing with `t_eval[0] >= t0`; the
    /// returned vector holds one state per grid point, in order.
    pub fn integrate_dense<const N: usize, S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t0: f64,
        y0: &[f64; N],
        t_eval: &[f64],
    ) -> Result<Vec<[f64; N]>, IntegrationError> {
        if t_eval.is_empty()
            || t_eval.iter().any(|t| !t.is_finite())
            || t_eval[0] < t0
            || t_eval.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(IntegrationError::BadTimeGrid);
        }
        self.stats = SolverStats::default();

        let t_end = t_eval[t_eval.len() - 1];
        let mut out = Vec::with_capacity(t_eval.len());
        let mut next = 0;

        let mut t = t0;
        let mut y = *y0;

        let mut k1 = [0.0; N];
        sys.rhs(t, &y, &mut k1);
        self.stats.rhs_evals += 1;
        if y.iter().chain(k1.iter()).any(|v| !v.is_finite()) {
            return Err(IntegrationError::NonFiniteState { time: t });
        }

        // Samples that coincide with the start of the span.
        while next < t_eval.len() && t_eval[next] <= t {
            out.push(y);
            next += 1;
        }
        if next == t_eval.len() {
            return Ok(out);
        }

        let mut yt = [0.0; N];
        let mut k2 = [0.0; N];
        let mut k3 = [0.0; N];
        let mut k4 = [0.0; N];
        let mut k5 = [0.0; N];
        let mut k6 = [0.0; N];
        let mut k7 = [0.0; N];

        let mut h = (t_end - t0) / 100.0;
        let mut steps = 0;

        while next < t_eval.len() {
            if steps >= self.max_steps {
                return Err(IntegrationError::StepLimitExceeded {
                    max_steps: self.max_steps,
                });
            }
            steps += 1;

            let h_floor = f64::EPSILON * (t_end - t0).max(t.abs());
            if h < h_floor {
                return Err(IntegrationError::StepSizeUnderflow { time: t });
            }

            // Clamp the final step exactly onto the end of the span.
            let (h_step, hits_end) = if t + h >= t_end {
                (t_end - t, true)
            } else {
                (h, false)
            };

            for i in 0..N {
                yt[i] = y[i] + h_step * A21 * k1[i];
            }
            sys.rhs(t + C2 * h_step, &yt, &mut k2);
            for i in 0..N {
                yt[i] = y[i] + h_step * (A31 * k1[i] + A32 * k2[i]);
            }
            sys.rhs(t + C3 * h_step, &yt, &mut k3);
            for i in 0..N {
                yt[i] = y[i] + h_step * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
            }
            sys.rhs(t + C4 * h_step, &yt, &mut k4);
            for i in 0..N {
                yt[i] =
                    y[i] + h_step * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
            }
            sys.rhs(t + C5 * h_step, &yt, &mut k5);
            for i in 0..N {
                yt[i] = y[i]
                    + h_step
                        * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
            }
            sys.rhs(t + h_step, &yt, &mut k6);

            let mut y_new = [0.0; N];
            for i in 0..N {
                y_new[i] = y[i]
                    + h_step * (B1 * k1[i] + B3 * k3[i] + B4 * k4[i] + B5 * k5[i] + B6 * k6[i]);
            }
            sys.rhs(t + h_step, &y_new, &mut k7);
            self.stats.rhs_evals += 6;

            // Scaled RMS norm of the embedded error estimate.
            let mut err_sq = 0.0;
            for i in 0..N {
                let err_i = h_step
                    * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i]
                        + E7 * k7[i]);
                let scale = self.tol.atol + self.tol.rtol * y[i].abs().max(y_new[i].abs());
                let ratio = err_i / scale;
                err_sq += ratio * ratio;
            }
            let err_norm = (err_sq / N as f64).sqrt();

            if !err_norm.is_finite() {
                // The trial step blew up; retry with a much smaller one.
                self.stats.rejected_steps += 1;
                h = h_step * 0.2;
                continue;
            }

            if err_norm <= 1.0 {
                let t_new = if hits_end { t_end } else { t + h_step };
                if y_new.iter().any(|v| !v.is_finite()) {
                    return Err(IntegrationError::NonFiniteState { time: t_new });
                }

                // Emit every requested sample covered by this step.
                while next < t_eval.len() && t_eval[next] <= t_new {
                    out.push(hermite(t, &y, &k1, &y_new, &k7, h_step, t_eval[next]));
                    next += 1;
                }

                t = t_new;
                y = y_new;
                k1 = k7; // first-same-as-last
                self.stats.accepted_steps += 1;

                let factor = if err_norm == 0.0 {
                    5.0
                } else {
                    (0.9 * err_norm.powf(-0.2)).clamp(0.2, 5.0)
                };
                h = h_step * factor;
            } else {
                self.stats.rejected_steps += 1;
                h = h_step * (0.9 * err_norm.powf(-0.2)).clamp(0.2, 1.0);
            }
        }

        Ok(out)
    }
}

/// Cubic Hermite interpolation of an accepted step at `t_query`.
///
/// Exact at both step endpoints; third-order accurate in between, which
/// sits below the step-controlled local error for the tolerances this
/// crate runs at.
fn hermite<const N: usize>(
    t_left: f64,
    y_left: &[f64; N],
    f_left: &[f64; N],
    y_right: &[f64; N],
    f_right: &[f64; N],
    h: f64,
    t_query: f64,
) -> [f64; N] {
    let theta = (t_query - t_left) / h;
    let theta2 = theta * theta;
    let theta3 = theta2 * theta;
    let h00 = 2.0 * theta3 - 3.0 * theta2 + 1.0;
    let h10 = theta3 - 2.0 * theta2 + theta;
    let h01 = -2.0 * theta3 + 3.0 * theta2;
    let h11 = theta3 - theta2;

    let mut out = [0.0; N];
    for i in 0..N {
        out[i] =
            h00 * y_left[i] + h10 * h * f_left[i] + h01 * y_right[i] + h11 * h * f_right[i];
    }
    out
}
