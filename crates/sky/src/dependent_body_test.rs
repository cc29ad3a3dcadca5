use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use nbody::Body;

use crate::dependent_body::DependentBody;
use crate::error::RadiativeError;
use crate::radiator::Radiator;
use crate::{DEFAULT_RADIATOR_DENSITY, DEFAULT_SURFACE_TEMPERATURE};

const SOLAR_MASS: f64 = 1.989e30; // kg
const EARTH_MASS: f64 = 5.972e24; // kg
const AU: f64 = 1.496e11; // m

fn planet_at(position: Point2<f64>, albedo: f64) -> DependentBody {
    let body = Body::new("planet", EARTH_MASS, position, Vector2::zeros()).unwrap();
    DependentBody::new(body, albedo).unwrap()
}

fn sun_at(position: Point2<f64>) -> Radiator {
    let body = Body::new("sun", SOLAR_MASS, position, Vector2::zeros()).unwrap();
    Radiator::new(body, DEFAULT_SURFACE_TEMPERATURE, DEFAULT_RADIATOR_DENSITY).unwrap()
}

#[test]
fn test_albedo_is_validated() {
    let body = || Body::new("p", EARTH_MASS, Point2::origin(), Vector2::zeros()).unwrap();

    assert!(DependentBody::new(body(), 0.0).is_ok());
    assert!(DependentBody::new(body(), 1.0).is_ok());
    assert!(matches!(
        DependentBody::new(body(), -0.1),
        Err(RadiativeError::AlbedoOutOfRange(_))
    ));
    assert!(matches!(
        DependentBody::new(body(), 1.1),
        Err(RadiativeError::AlbedoOutOfRange(_))
    ));
    assert!(matches!(
        DependentBody::new(body(), f64::NAN),
        Err(RadiativeError::AlbedoOutOfRange(_))
    ));
}

#[test]
fn test_single_sun_at_one_au_fully_absorbing() {
    // Flat-absorber balance: T = (S / σ)^0.25 ~ 394 K for the solar
    // constant.
    let planet = planet_at(Point2::origin(), 0.0);
    let sun = sun_at(Point2::new(AU, 0.0));

    let temperature = planet.equilibrium_temperature(&[sun]);
    assert_relative_eq!(temperature, 394.0, max_relative = 0.02);
}

#[test]
fn test_albedo_reduces_temperature() {
    let sun = sun_at(Point2::new(AU, 0.0));
    let dark = planet_at(Point2::origin(), 0.0);
    let bright = planet_at(Point2::origin(), 0.9);

    let t_dark = dark.equilibrium_temperature(std::slice::from_ref(&sun));
    let t_bright = bright.equilibrium_temperature(&[sun]);

    assert!(t_bright < t_dark);
    // T scales as (1 - albedo)^0.25
    assert_relative_eq!(t_bright / t_dark, 0.1f64.powf(0.25), max_relative = 1e-9);
}

#[test]
fn test_perfect_mirror_is_at_zero_kelvin() {
    let planet = planet_at(Point2::origin(), 1.0);
    let sun = sun_at(Point2::new(AU, 0.0));

    assert_eq!(planet.equilibrium_temperature(&[sun]), 0.0);
}

#[test]
fn test_no_radiators_is_at_zero_kelvin() {
    let planet = planet_at(Point2::origin(), 0.5);
    assert_eq!(planet.equilibrium_temperature(&[]), 0.0);
}

#[test]
fn test_three_suns_sum_their_irradiance() {
    let planet = planet_at(Point2::origin(), 0.5);
    let suns = [
        sun_at(Point2::new(AU, 0.0)),
        sun_at(Point2::new(-AU, 0.0)),
        sun_at(Point2::new(0.0, AU)),
    ];

    let single = planet.equilibrium_temperature(&suns[..1]);
    let triple = planet.equilibrium_temperature(&suns);

    // Tripling the absorbed power scales T by 3^0.25.
    assert_relative_eq!(triple / single, 3.0f64.powf(0.25), max_relative = 1e-9);
}

#[test]
fn test_temperature_is_finite_away_from_coincidence() {
    let planet = planet_at(Point2::origin(), 0.5);
    let sun = sun_at(Point2::new(1.0, 0.0)); // absurdly close but distinct

    let temperature = planet.equilibrium_temperature(&[sun]);
    assert!(temperature.is_finite());
    assert!(temperature >= 0.0);
}

#[test]
fn test_coincident_radiator_yields_infinite_temperature() {
    let planet = planet_at(Point2::origin(), 0.5);
    let sun = sun_at(Point2::origin());

    assert_eq!(planet.equilibrium_temperature(&[sun]), f64::INFINITY);
}

#[test]
fn test_moved_to_keeps_albedo() {
    let planet = planet_at(Point2::origin(), 0.42);
    let moved = planet.moved_to(Point2::new(AU, 0.0), Vector2::new(0.0, 1.0e3));

    assert_eq!(moved.albedo, 0.42);
    assert_eq!(moved.body.position, Point2::new(AU, 0.0));
}
