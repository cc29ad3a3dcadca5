use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::error::IntegrationError;
use crate::ode::Tolerances;
use crate::system::FourBodySystem;

const SOLAR_MASS: f64 = 1.989e30; // kg
const EARTH_MASS: f64 = 5.972e24; // kg
const YEAR: f64 = 3.154e7; // s

/// Three solar-mass radiators in a triangle around an Earth-mass body,
/// each with a tangential kick to keep the triangle from collapsing.
fn make_scenario() -> FourBodySystem {
    let tangential = 3.5e4; // m/s
    let positions = [
        Point2::new(0.0, 3.0e11),
        Point2::new(1.5e11, -1.5e11),
        Point2::new(-1.5e11, -1.5e11),
    ];
    let radiators = positions.map(|p| {
        let r = p.coords.magnitude();
        let velocity = Vector2::new(-p.y / r, p.x / r) * tangential;
        Body::new("sun", SOLAR_MASS, p, velocity).unwrap()
    });
    let planet = Body::new("planet", EARTH_MASS, Point2::origin(), Vector2::zeros()).unwrap();
    FourBodySystem::new(radiators, planet)
}

fn linspace(t0: f64, t1: f64, n: usize) -> Vec<f64> {
    let dt = (t1 - t0) / (n - 1) as f64;
    (0..n).map(|i| t0 + i as f64 * dt).collect()
}

#[test]
fn test_trajectory_times_match_requested_grid() {
    let system = make_scenario();
    let grid = linspace(0.0, YEAR / 10.0, 50);

    let trajectory = system
        .integrate(0.0, YEAR / 10.0, &grid, Tolerances::default())
        .unwrap();

    assert_eq!(trajectory.len(), grid.len());
    assert_eq!(trajectory.times(), grid.as_slice());
    assert!(trajectory.times().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_momentum_is_conserved() {
    let system = make_scenario();
    let grid = linspace(0.0, YEAR / 10.0, 50);

    let trajectory = system
        .integrate(0.0, YEAR / 10.0, &grid, Tolerances::default())
        .unwrap();

    let initial = system.total_momentum();
    let masses: Vec<f64> = system.bodies().iter().map(|b| b.mass).collect();

    let last = trajectory.len() - 1;
    let final_momentum = trajectory
        .sample(last)
        .iter()
        .zip(&masses)
        .map(|(state, mass)| state.velocity * *mass)
        .fold(Vector2::zeros(), |acc, p| acc + p);

    let drift = (final_momentum - initial).magnitude() / initial.magnitude();
    assert!(drift < 1e-6, "momentum drift: {:.2e}", drift);
}

#[test]
fn test_energy_is_conserved() {
    let system = make_scenario();
    let grid = linspace(0.0, YEAR / 10.0, 50);

    let trajectory = system
        .integrate(0.0, YEAR / 10.0, &grid, Tolerances::default())
        .unwrap();

    let initial = system.kinetic_energy() + system.potential_energy();

    // Rebuild bodies at the final sample to evaluate both energy terms.
    let last = trajectory.len() - 1;
    let final_bodies: Vec<Body> = system
        .bodies()
        .iter()
        .zip(trajectory.sample(last).iter())
        .map(|(body, state)| {
            Body::new(body.name.clone(), body.mass, state.position, state.velocity).unwrap()
        })
        .collect();
    let final_energy: f64 = final_bodies.iter().map(Body::kinetic_energy).sum::<f64>()
        + crate::gravity::potential_energy(&final_bodies);

    let drift = (final_energy - initial).abs() / initial.abs();
    assert!(drift < 1e-6, "energy drift: {:.2e}", drift);
}

#[test]
fn test_scenario_stays_finite_over_one_year() {
    let system = make_scenario();
    let grid = linspace(0.0, YEAR, 2000);

    let trajectory = system
        .integrate(0.0, YEAR, &grid, Tolerances::default())
        .unwrap();

    assert_eq!(trajectory.len(), 2000);
    assert!(trajectory.is_finite());
}

#[test]
fn test_integrate_does_not_mutate_the_system() {
    let system = make_scenario();
    let before = system.bodies().clone();
    let grid = linspace(0.0, YEAR / 100.0, 10);

    system
        .integrate(0.0, YEAR / 100.0, &grid, Tolerances::default())
        .unwrap();

    assert_eq!(system.bodies(), &before);
}

#[test]
fn test_first_sample_matches_initial_conditions() {
    let system = make_scenario();
    let grid = linspace(0.0, YEAR / 100.0, 10);

    let trajectory = system
        .integrate(0.0, YEAR / 100.0, &grid, Tolerances::default())
        .unwrap();

    for (body, state) in system.bodies().iter().zip(trajectory.sample(0)) {
        assert_relative_eq!(state.position.x, body.position.x);
        assert_relative_eq!(state.position.y, body.position.y);
    }
}

#[test]
fn test_coincident_bodies_diverge() {
    let at_origin = || Body::new("b", SOLAR_MASS, Point2::origin(), Vector2::zeros()).unwrap();
    let offset = |x: f64| {
        Body::new("b", SOLAR_MASS, Point2::new(x, 0.0), Vector2::zeros()).unwrap()
    };
    let system = FourBodySystem::new(
        [at_origin(), at_origin(), offset(1.0e11)],
        offset(2.0e11),
    );

    let result = system.integrate(0.0, 100.0, &[50.0, 100.0], Tolerances::default());

    assert!(
        matches!(
            result,
            Err(IntegrationError::NonFiniteState { .. })
                | Err(IntegrationError::StepSizeUnderflow { .. })
        ),
        "expected divergence, got {:?}",
        result.map(|t| t.len())
    );
}

#[test]
fn test_grid_outside_span_is_rejected() {
    let system = make_scenario();

    let result = system.integrate(0.0, 100.0, &[50.0, 150.0], Tolerances::default());
    assert!(matches!(result, Err(IntegrationError::BadTimeGrid)));

    let result = system.integrate(100.0, 0.0, &[50.0], Tolerances::default());
    assert!(matches!(result, Err(IntegrationError::BadTimeGrid)));
}
