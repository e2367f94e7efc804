//! tilesim - seeded tile-grid entity physics micro-simulation
//!
//! Core modules:
//! - `sim`: Deterministic kernel (generator, grid, entity store, frame step)
//! - `scenario`: Run parameters with the fixed benchmark as default

pub mod scenario;
pub mod sim;

pub use scenario::Scenario;
pub use sim::{RunReport, run, run_scenario};

/// Kernel constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f64 = 18.0;
    /// Horizontal speed kept (and reversed) after hitting a wall
    pub const BOUNCE_DAMPING: f64 = 0.3;
    /// Ground friction rate; vx is scaled by `1 - GROUND_FRICTION * dt`
    pub const GROUND_FRICTION: f64 = 8.0;

    /// Draws below this become solid tiles
    pub const SOLID_THRESHOLD: f64 = 0.18;
    /// Chance a spawned entity runs the ledge AI
    pub const AI_PROBABILITY: f64 = 0.25;
    /// Box size of every entity on both axes
    pub const ENTITY_EXTENT: f64 = 0.9;
    /// Life at spawn is in [LIFE_MIN, LIFE_MIN + LIFE_SPAN)
    pub const LIFE_MIN: f64 = 300.0;
    pub const LIFE_SPAN: f64 = 600.0;

    /// Benchmark scenario
    pub const DEFAULT_SEED: u32 = 123_456_789;
    pub const GRID_WIDTH: usize = 128;
    pub const GRID_HEIGHT: usize = 72;
    pub const FRAME_COUNT: u64 = 3600;
    pub const INITIAL_ENTITIES: usize = 300;
    pub const SPAWN_PER_FRAME: usize = 3;
}

/// Convert a world coordinate to a tile index, truncating toward zero
#[inline]
pub fn tile_coord(coord: f64) -> i32 {
    coord as i32
}
