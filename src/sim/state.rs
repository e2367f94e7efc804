//! Simulation state
//!
//! Everything one run owns: the generator stream, the grid, the entity table,
//! the running checksum and the frame counter.

use super::grid::TileGrid;
use super::rng::Xorshift32;
use super::store::{Entity, EntityStore};

/// Complete state of a single run (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the generator started from
    pub seed: u32,
    /// Shared generator; grid construction and spawning both draw from it
    pub rng: Xorshift32,
    /// Static tile field
    pub grid: TileGrid,
    /// Live entities
    pub store: EntityStore,
    /// Accumulated checksum
    pub checksum: f64,
    /// Frames stepped so far
    pub frame: u64,
    /// Rows appended since the run started (initial population included)
    pub total_spawned: u64,
    /// Rows removed by compaction since the run started
    pub total_expired: u64,
}

impl SimState {
    /// Seed the generator and build the grid from it. The store starts empty.
    pub fn new(seed: u32, width: usize, height: usize) -> Self {
        let mut rng = Xorshift32::new(seed);
        let grid = TileGrid::generate(width, height, &mut rng);
        log::debug!(
            "Grid {}x{} built from seed {}: {} solid tiles",
            width,
            height,
            seed,
            grid.solid_count()
        );
        Self::with_grid(seed, rng, grid)
    }

    /// Start from an existing grid and generator position
    pub fn with_grid(seed: u32, rng: Xorshift32, grid: TileGrid) -> Self {
        Self {
            seed,
            rng,
            grid,
            store: EntityStore::new(),
            checksum: 0.0,
            frame: 0,
            total_spawned: 0,
            total_expired: 0,
        }
    }

    /// Draw one entity from the shared stream and append it
    pub fn spawn_entity(&mut self) {
        let entity = Entity::spawn(&mut self.rng, self.grid.width(), self.grid.height());
        self.store.push(entity);
        self.total_spawned += 1;
    }

    /// Append `count` entities
    pub fn spawn_entities(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn_entity();
        }
    }
}
