//! Shared cache of integrated trajectories, keyed by frame count.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use nbody::Trajectory;

/// Read-mostly map from `total_frames` to the trajectory sampled on
/// that grid.
///
/// A sampler's configuration is immutable, so within one sampler the
/// frame count alone identifies the integration. Concurrent misses may
/// integrate the same grid twice; the writers race and the last one
/// wins, which is safe because integration is deterministic for
/// identical inputs.
#[derive(Debug, Default)]
pub struct TrajectoryCache {
    entries: RwLock<HashMap<u32, Arc<Trajectory>>>,
}

impl TrajectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached trajectory for `total_frames`, if any. A poisoned
    /// lock reads as a miss so callers fall back to recomputing.
    pub fn get(&self, total_frames: u32) -> Option<Arc<Trajectory>> {
        match self.entries.read() {
            Ok(entries) => entries.get(&total_frames).cloned(),
            Err(_) => None,
        }
    }

    pub fn insert(&self, total_frames: u32, trajectory: Arc<Trajectory>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(total_frames, trajectory);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
