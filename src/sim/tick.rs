//! Fixed timestep simulation tick
//!
//! Spawn, move every live row once, fold it into the checksum, then compact.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{aabb_hits_solid, floor_ahead_is_empty};
use super::grid::TileGrid;
use super::state::SimState;
use super::store::Entity;
use crate::consts::*;

/// Counters for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    pub spawned: usize,
    pub updated: usize,
    pub expired: usize,
    pub live: usize,
}

/// Advance one entity by `dt` against the grid
pub fn step_entity(grid: &TileGrid, entity: &mut Entity, dt: f64) {
    let mut x = entity.pos.x;
    let mut y = entity.pos.y;
    let mut vx = entity.vel.x;
    let mut vy = entity.vel.y;
    let mut on_ground = entity.on_ground;
    let extents = entity.extents;

    vy += GRAVITY * dt;

    // Turns back when there is no floor ahead
    if entity.is_ai && floor_ahead_is_empty(grid, DVec2::new(x, y), vx) {
        vx = -vx;
    }

    let new_x = x + vx * dt;
    if !aabb_hits_solid(grid, DVec2::new(new_x, y), extents) {
        x = new_x;
    } else {
        vx = -vx * BOUNCE_DAMPING;
    }

    let new_y = y + vy * dt;
    if !aabb_hits_solid(grid, DVec2::new(x, new_y), extents) {
        y = new_y;
        on_ground = false;
    } else {
        if vy > 0.0 {
            on_ground = true;
        }
        vy = 0.0;
    }

    if on_ground {
        vx *= 1.0 - GROUND_FRICTION * dt;
    }

    entity.pos = DVec2::new(x, y);
    entity.vel = DVec2::new(vx, vy);
    entity.on_ground = on_ground;
    entity.life -= 1.0;
}

/// Advance the simulation by one frame.
///
/// New rows are appended first so they are stepped in the same frame they
/// spawn. Compaction runs only after every row has been stepped.
pub fn tick(state: &mut SimState, spawn_per_frame: usize, dt: f64) -> FrameStats {
    state.spawn_entities(spawn_per_frame);

    let updated = state.store.len();
    let mut checksum = state.checksum;
    for i in 0..updated {
        let mut entity = state.store.get(i);
        step_entity(&state.grid, &mut entity, dt);
        checksum = checksum + entity.pos.x + entity.pos.y + entity.vel.x + entity.vel.y;
        state.store.set(i, &entity);
    }
    state.checksum = checksum;

    let expired = state.store.compact();
    state.total_expired += expired as u64;
    state.frame += 1;

    FrameStats {
        spawned: spawn_per_frame,
        updated,
        expired,
        live: state.store.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::Xorshift32;

    fn open_grid(width: usize, height: usize) -> TileGrid {
        let row = ".".repeat(width);
        let rows: Vec<&str> = (0..height).map(|_| row.as_str()).collect();
        TileGrid::from_ascii(&rows)
    }

    fn entity_at(x: f64, y: f64, vx: f64, vy: f64) -> Entity {
        Entity {
            pos: DVec2::new(x, y),
            vel: DVec2::new(vx, vy),
            extents: DVec2::splat(ENTITY_EXTENT),
            on_ground: false,
            is_ai: false,
            life: 10.0,
        }
    }

    fn state_with(grid: TileGrid, entities: &[Entity]) -> SimState {
        let mut state = SimState::with_grid(1, Xorshift32::new(1), grid);
        for e in entities {
            state.store.push(*e);
        }
        state
    }

    #[test]
    fn test_free_fall() {
        let grid = open_grid(10, 10);
        let mut e = entity_at(4.0, 2.0, 0.6, 0.0);
        step_entity(&grid, &mut e, SIM_DT);

        let vy = 18.0 * SIM_DT;
        assert_eq!(e.vel.y, vy);
        assert_eq!(e.vel.x, 0.6);
        assert_eq!(e.pos.x, 4.0 + 0.6 * SIM_DT);
        assert_eq!(e.pos.y, 2.0 + vy * SIM_DT);
        assert!(!e.on_ground);
        assert_eq!(e.life, 9.0);
    }

    #[test]
    fn test_landing_sets_on_ground_and_applies_friction() {
        // Floor at y = 3; box bottom at 2.95 moves into it
        let grid = TileGrid::from_ascii(&["....", "....", "....", "####"]);
        let mut e = entity_at(1.2, 2.05, 1.2, 5.0);
        step_entity(&grid, &mut e, SIM_DT);

        assert!(e.on_ground);
        assert_eq!(e.vel.y, 0.0);
        assert_eq!(e.pos.y, 2.05);
        assert_eq!(e.vel.x, 1.2 * (1.0 - 8.0 * SIM_DT));
    }

    #[test]
    fn test_ceiling_block_does_not_ground() {
        let grid = TileGrid::from_ascii(&["####", "....", "....", "...."]);
        let mut e = entity_at(1.2, 1.01, 0.0, -60.0);
        step_entity(&grid, &mut e, SIM_DT);

        assert!(!e.on_ground);
        assert_eq!(e.vel.y, 0.0);
        assert_eq!(e.pos.y, 1.01);
    }

    #[test]
    fn test_wall_bounce_damps() {
        let grid = TileGrid::from_ascii(&["....", "...#", "...."]);
        let mut e = entity_at(2.05, 1.05, 6.0, -0.3);
        step_entity(&grid, &mut e, SIM_DT);

        assert_eq!(e.pos.x, 2.05);
        assert_eq!(e.vel.x, -6.0 * BOUNCE_DAMPING);
    }

    #[test]
    fn test_ai_reverses_when_floor_ahead_is_empty() {
        let grid = open_grid(10, 10);
        let mut ai = entity_at(4.0, 2.0, 1.5, 0.0);
        ai.is_ai = true;
        step_entity(&grid, &mut ai, SIM_DT);
        assert_eq!(ai.vel.x, -1.5);

        let mut plain = entity_at(4.0, 2.0, 1.5, 0.0);
        step_entity(&grid, &mut plain, SIM_DT);
        assert_eq!(plain.vel.x, 1.5);
    }

    #[test]
    fn test_ai_keeps_direction_over_floor() {
        // Probe at (5, 3) is solid; the box itself stays clear of it
        let grid = TileGrid::from_ascii(&[
            "..........",
            "..........",
            "..........",
            ".....#....",
            "..........",
        ]);
        let mut ai = entity_at(4.0, 2.0, 1.5, -1.0);
        ai.is_ai = true;
        step_entity(&grid, &mut ai, SIM_DT);
        assert_eq!(ai.vel.x, 1.5);
    }

    #[test]
    fn test_empty_frame_leaves_checksum() {
        let mut state = state_with(open_grid(4, 4), &[]);
        state.checksum = 12.5;
        let stats = tick(&mut state, 0, SIM_DT);
        assert_eq!(state.checksum, 12.5);
        assert_eq!(stats, FrameStats::default());
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_checksum_includes_expiring_rows() {
        let mut dying = entity_at(1.0, 1.0, 0.0, 0.0);
        dying.life = 1.0;
        let mut state = state_with(open_grid(6, 6), &[dying]);

        let mut expected = dying;
        step_entity(&state.grid, &mut expected, SIM_DT);

        let stats = tick(&mut state, 0, SIM_DT);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.live, 0);
        assert!(state.store.is_empty());
        assert_eq!(
            state.checksum,
            0.0 + expected.pos.x + expected.pos.y + expected.vel.x + expected.vel.y
        );
    }

    #[test]
    fn test_spawned_rows_step_same_frame() {
        let mut state = SimState::new(3, 16, 16);
        let stats = tick(&mut state, 4, SIM_DT);

        assert_eq!(stats.spawned, 4);
        assert_eq!(stats.updated, 4);
        assert_eq!(state.store.len(), 4);
        assert!(state.store.iter().all(|e| e.life < 900.0 - 1.0 + 1e-9));
        assert_ne!(state.checksum, 0.0);
    }

    #[test]
    fn test_store_shrinks_to_survivors() {
        let mut a = entity_at(1.0, 1.0, 0.0, 0.0);
        a.life = 1.0;
        let b = entity_at(2.0, 1.0, 0.0, 0.0);
        let mut c = entity_at(3.0, 1.0, 0.0, 0.0);
        c.life = 0.5;
        let d = entity_at(4.0, 1.0, 0.0, 0.0);
        let mut state = state_with(open_grid(8, 8), &[a, b, c, d]);

        let stats = tick(&mut state, 0, SIM_DT);
        assert_eq!(stats.expired, 2);
        assert_eq!(state.store.len(), 2);
        assert!(state.store.lengths_consistent());
        let xs: Vec<f64> = state.store.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![2.0, 4.0]);
        assert_eq!(state.total_expired, 2);
    }
}
