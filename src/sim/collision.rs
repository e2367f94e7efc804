//! Tile collision queries
//!
//! Coarse corner sampling against the tile grid. A box only "sees" the tiles
//! under its four corners, so it can slip through a strip thinner than itself.

use glam::DVec2;

use super::grid::TileGrid;
use crate::tile_coord;

/// Check whether the box `[pos.x, pos.x + extents.x] x [pos.y, pos.y + extents.y]`
/// has any corner on a solid tile
pub fn aabb_hits_solid(grid: &TileGrid, pos: DVec2, extents: DVec2) -> bool {
    let x0 = tile_coord(pos.x);
    let y0 = tile_coord(pos.y);
    let x1 = tile_coord(pos.x + extents.x);
    let y1 = tile_coord(pos.y + extents.y);

    grid.is_solid(x0, y0)
        || grid.is_solid(x1, y0)
        || grid.is_solid(x0, y1)
        || grid.is_solid(x1, y1)
}

/// Probe the tile one unit ahead (in the direction of `vx`) and one unit
/// below `pos`. Returns true when that tile is empty.
pub fn floor_ahead_is_empty(grid: &TileGrid, pos: DVec2, vx: f64) -> bool {
    let dir = if vx >= 0.0 { 1.0 } else { -1.0 };
    let ahead_x = tile_coord(pos.x + dir);
    let foot_y = tile_coord(pos.y + 1.0);
    !grid.is_solid(ahead_x, foot_y)
}
