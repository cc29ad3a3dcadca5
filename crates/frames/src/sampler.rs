//! Frame-by-frame sampling of a simulated year.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use nbody::{BodyState, FourBodySystem, Tolerances, Trajectory};
use sky::visibility::is_visible;
use sky::{DependentBody, Radiator};

use crate::cache::TrajectoryCache;
use crate::config::SystemConfig;
use crate::error::{ConfigError, FrameError};

/// Physical span covered by a frame sequence, in seconds (one year).
/// Frame 0 is at t = 0 and the last frame is at exactly this time.
pub const FRAME_WINDOW_SECONDS: f64 = 3.154e7;

/// A 2-D position in a rendered frame, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramePoint {
    pub x: f64,
    pub y: f64,
}

impl From<&BodyState> for FramePoint {
    fn from(state: &BodyState) -> Self {
        Self {
            x: state.position.x,
            y: state.position.y,
        }
    }
}

/// Everything a renderer needs for one instant of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Sun positions in configuration order.
    pub suns: [FramePoint; 3],
    pub planet: FramePoint,
    /// Black-body equilibrium temperature of the planet, in Kelvin.
    pub planet_temperature_kelvin: f64,
    /// Whether each sun is above the planet's horizon, in sun order.
    pub visibility: [bool; 3],
}

/// Samples frames out of an integrated trajectory.
///
/// The configuration is fixed at construction; integration runs lazily
/// on the first request for a given frame count and is shared through a
/// [`TrajectoryCache`] after that, so asking for every frame of an
/// animation costs one integration, not one per frame.
#[derive(Debug)]
pub struct FrameSampler {
    system: FourBodySystem,
    radiators: [Radiator; 3],
    planet: DependentBody,
    tolerances: Tolerances,
    cache: Arc<TrajectoryCache>,
}

impl FrameSampler {
    pub fn new(config: &SystemConfig) -> Result<Self, ConfigError> {
        Self::with_cache(config, Arc::new(TrajectoryCache::new()))
    }

    /// Builds a sampler sharing `cache` with other samplers of the same
    /// configuration.
    pub fn with_cache(
        config: &SystemConfig,
        cache: Arc<TrajectoryCache>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            system: config.build_system()?,
            radiators: config.build_radiators()?,
            planet: config.build_planet()?,
            tolerances: Tolerances::default(),
            cache,
        })
    }

    /// The sample times for a run of `total_frames` frames: linearly
    /// spaced over the window, endpoint pinned so the last frame lands
    /// at exactly one year.
    pub fn time_grid(total_frames: u32) -> Vec<f64> {
        if total_frames == 1 {
            return vec![0.0];
        }
        let n = total_frames as usize;
        let dt = FRAME_WINDOW_SECONDS / (total_frames - 1) as f64;
        (0..n)
            .map(|i| {
                if i + 1 == n {
                    FRAME_WINDOW_SECONDS
                } else {
                    i as f64 * dt
                }
            })
            .collect()
    }

    /// The full trajectory for a run of `total_frames` frames.
    ///
    /// Integrates on the first call per frame count and serves the
    /// cached result afterwards. Consumers that want every frame should
    /// take this rather than calling [`FrameSampler::get_frame`] in a
    /// loop.
    pub fn trajectory(&self, total_frames: u32) -> Result<Arc<Trajectory>, FrameError> {
        if total_frames == 0 {
            return Err(FrameError::EmptyGrid);
        }
        if let Some(trajectory) = self.cache.get(total_frames) {
            return Ok(trajectory);
        }
        let grid = Self::time_grid(total_frames);
        let trajectory = Arc::new(self.system.integrate(
            0.0,
            FRAME_WINDOW_SECONDS,
            &grid,
            self.tolerances,
        )?);
        self.cache.insert(total_frames, Arc::clone(&trajectory));
        Ok(trajectory)
    }

    /// The rendered state at `frame_index` of a `total_frames`-frame
    /// run.
    pub fn get_frame(&self, frame_index: u32, total_frames: u32) -> Result<Frame, FrameError> {
        if total_frames == 0 {
            return Err(FrameError::EmptyGrid);
        }
        if frame_index >= total_frames {
            return Err(FrameError::IndexOutOfRange {
                frame_index,
                total_frames,
            });
        }

        let trajectory = self.trajectory(total_frames)?;
        let sample = trajectory.sample(frame_index as usize);
        let planet_state = sample[3];

        let radiators: [Radiator; 3] = std::array::from_fn(|i| {
            self.radiators[i].moved_to(sample[i].position, sample[i].velocity)
        });
        let planet = self
            .planet
            .moved_to(planet_state.position, planet_state.velocity);

        Ok(Frame {
            suns: std::array::from_fn(|i| FramePoint::from(&sample[i])),
            planet: FramePoint::from(&planet_state),
            planet_temperature_kelvin: planet.equilibrium_temperature(&radiators),
            visibility: std::array::from_fn(|i| {
                is_visible(sample[i].position, planet_state.position)
            }),
        })
    }
}
