//! Static tile grid
//!
//! A row-major field of solid/empty cells generated once per run. Everything
//! outside the field reads as solid, which gives the world an implicit wall.

use serde::{Deserialize, Serialize};

use super::rng::Xorshift32;
use crate::consts::SOLID_THRESHOLD;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
}

impl Tile {
    #[inline]
    pub fn is_solid(self) -> bool {
        self == Tile::Solid
    }
}

/// Immutable tile field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a `width * height` grid, drawing one value per cell in row-major
    /// order. Draws below [`SOLID_THRESHOLD`] become solid.
    pub fn generate(width: usize, height: usize, rng: &mut Xorshift32) -> Self {
        let tiles = (0..width * height)
            .map(|_| {
                if rng.next_f64() < SOLID_THRESHOLD {
                    Tile::Solid
                } else {
                    Tile::Empty
                }
            })
            .collect();
        Self::from_tiles(width, height, tiles)
    }

    /// Wrap an existing row-major tile vector
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            width * height,
            "tile count must equal width * height"
        );
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "grid dimensions must fit tile coordinates"
        );
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parse rows of `#` (solid) and `.` (empty); first row is y = 0
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "all rows must have the same width");
            tiles.extend(row.bytes().map(|b| match b {
                b'#' => Tile::Solid,
                _ => Tile::Empty,
            }));
        }
        Self::from_tiles(width, height, tiles)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at integer coordinates; out of range is always solid
    #[inline]
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return Tile::Solid;
        };
        if col >= self.width || row >= self.height {
            return Tile::Solid;
        }
        self.tiles[row * self.width + col]
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_solid()
    }

    /// Number of solid cells inside the field
    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_solid()).count()
    }
}
