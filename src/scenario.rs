//! Run scenario
//!
//! The fixed benchmark parameters, with an optional JSON override for
//! profiling other population sizes. Physics constants are not part of it.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a JSON scenario file
pub const SCENARIO_ENV: &str = "TILESIM_SCENARIO";

/// Smallest grid side that leaves room to spawn inside the border
pub const MIN_GRID_SIDE: usize = 3;

/// Parameters of a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Generator seed
    pub seed: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Frames to step
    pub frames: u64,
    /// Entities spawned before the first frame
    pub initial_entities: usize,
    /// Entities spawned at the start of every frame
    pub spawn_per_frame: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            frames: FRAME_COUNT,
            initial_entities: INITIAL_ENTITIES,
            spawn_per_frame: SPAWN_PER_FRAME,
        }
    }
}

impl Scenario {
    /// Parse a scenario; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Check the grid is large enough to spawn into and small enough to index
    pub fn is_valid(&self) -> bool {
        self.grid_width >= MIN_GRID_SIDE
            && self.grid_height >= MIN_GRID_SIDE
            && self.grid_width <= i32::MAX as usize
            && self.grid_height <= i32::MAX as usize
            && self.grid_width.checked_mul(self.grid_height).is_some()
    }

    /// Load the scenario named by [`SCENARIO_ENV`], or the default.
    ///
    /// Any problem with the file is logged and the default is used instead.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SCENARIO_ENV) else {
            log::debug!("Using default scenario");
            return Self::default();
        };

        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to read scenario {}: {} - using default", path, e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(scenario) if scenario.is_valid() => {
                log::info!("Loaded scenario from {}", path);
                scenario
            }
            Ok(scenario) => {
                log::warn!(
                    "Scenario {} has invalid grid {}x{} - using default",
                    path,
                    scenario.grid_width,
                    scenario.grid_height
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse scenario {}: {} - using default", path, e);
                Self::default()
            }
        }
    }
}
