pub mod body;
pub mod error;
pub mod gravity;
pub mod ode;
pub mod system;
pub mod trajectory;

#[cfg(test)]
mod system_test;

pub use body::Body;
pub use error::{BodyError, IntegrationError};
pub use gravity::G;
pub use ode::{Dopri5, OdeSystem, SolverStats, Tolerances};
pub use system::{FourBodySystem, BODY_COUNT, STATE_DIM};
pub use trajectory::{BodyState, Trajectory};
