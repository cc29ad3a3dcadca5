//! Presentation sampling layer over the dynamical and radiative cores.
//!
//! Turns a declarative [`SystemConfig`] into per-frame render state: a
//! year of motion is integrated once, cached, and served frame by frame
//! as serializable [`Frame`] values.

pub mod cache;
pub mod config;
pub mod error;
pub mod sampler;

#[cfg(test)]
mod cache_test;

pub use cache::TrajectoryCache;
pub use config::{PlanetConfig, RadiatorConfig, SystemConfig};
pub use error::{ConfigError, FrameError};
pub use sampler::{Frame, FramePoint, FrameSampler, FRAME_WINDOW_SECONDS};
