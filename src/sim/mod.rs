//! Deterministic simulation module
//!
//! All kernel logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - One seeded generator stream per run
//! - Stable row order (spawn order, survivors never reordered)
//! - No I/O beyond logging

pub mod collision;
pub mod grid;
pub mod rng;
pub mod run;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{aabb_hits_solid, floor_ahead_is_empty};
pub use grid::{Tile, TileGrid};
pub use rng::{Xorshift32, draw};
pub use run::{RunReport, format_checksum, run, run_scenario};
pub use state::SimState;
pub use store::{Entity, EntityStore};
pub use tick::{FrameStats, step_entity, tick};
