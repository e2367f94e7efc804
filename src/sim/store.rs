//! Entity store
//!
//! Entities are rows in a set of parallel per-attribute vectors that share
//! one index. Rows are appended on spawn and removed only by [`EntityStore::compact`],
//! which keeps survivors in their original relative order.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::Xorshift32;
use crate::consts::*;

/// One entity row, loaded out of (or written back into) the store by value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Box size; the collision box spans `[pos, pos + extents]`
    pub extents: DVec2,
    pub on_ground: bool,
    pub is_ai: bool,
    /// Frames left; the row expires once this reaches zero or below
    pub life: f64,
}

impl Entity {
    /// Draw a fresh entity inside a `width * height` grid.
    ///
    /// Draw order is x, y, vx, vy, ai, life. Changing it changes every
    /// value the run produces afterwards.
    pub fn spawn(rng: &mut Xorshift32, width: usize, height: usize) -> Self {
        let x = rng.next_f64() * (width as f64 - 2.0) + 1.0;
        let y = rng.next_f64() * (height as f64 - 2.0) + 1.0;
        let vx = (rng.next_f64() - 0.5) * 6.0;
        let vy = (rng.next_f64() - 0.5) * 2.0;
        let is_ai = rng.next_f64() < AI_PROBABILITY;
        let life = LIFE_MIN + rng.next_f64() * LIFE_SPAN;

        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::new(vx, vy),
            extents: DVec2::splat(ENTITY_EXTENT),
            on_ground: false,
            is_ai,
            life,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Compacting structure-of-vectors entity table
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pos: Vec<DVec2>,
    vel: Vec<DVec2>,
    extents: Vec<DVec2>,
    on_ground: Vec<bool>,
    is_ai: Vec<bool>,
    life: Vec<f64>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pos: Vec::with_capacity(capacity),
            vel: Vec::with_capacity(capacity),
            extents: Vec::with_capacity(capacity),
            on_ground: Vec::with_capacity(capacity),
            is_ai: Vec::with_capacity(capacity),
            life: Vec::with_capacity(capacity),
        }
    }

    /// Number of live rows
    #[inline]
    pub fn len(&self) -> usize {
        self.debug_check_lengths();
        self.pos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a row
    pub fn push(&mut self, entity: Entity) {
        self.pos.push(entity.pos);
        self.vel.push(entity.vel);
        self.extents.push(entity.extents);
        self.on_ground.push(entity.on_ground);
        self.is_ai.push(entity.is_ai);
        self.life.push(entity.life);
        self.debug_check_lengths();
    }

    /// Load row `index` by value.
    ///
    /// Panics if `index` is past the live boundary.
    #[inline]
    pub fn get(&self, index: usize) -> Entity {
        assert!(
            index < self.len(),
            "entity row {index} out of range (len {})",
            self.len()
        );
        Entity {
            pos: self.pos[index],
            vel: self.vel[index],
            extents: self.extents[index],
            on_ground: self.on_ground[index],
            is_ai: self.is_ai[index],
            life: self.life[index],
        }
    }

    /// Write row `index` back.
    ///
    /// Panics if `index` is past the live boundary.
    #[inline]
    pub fn set(&mut self, index: usize, entity: &Entity) {
        assert!(
            index < self.len(),
            "entity row {index} out of range (len {})",
            self.len()
        );
        self.pos[index] = entity.pos;
        self.vel[index] = entity.vel;
        self.extents[index] = entity.extents;
        self.on_ground[index] = entity.on_ground;
        self.is_ai[index] = entity.is_ai;
        self.life[index] = entity.life;
    }

    /// Iterate rows in index order
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }

    /// Drop every row whose life is at or below zero.
    ///
    /// Survivors are shifted down into a prefix in their original order and
    /// every attribute vector is truncated to the survivor count. Returns the
    /// number of rows removed.
    pub fn compact(&mut self) -> usize {
        let len = self.len();
        let mut write = 0;

        for read in 0..len {
            if self.life[read] <= 0.0 {
                continue;
            }
            if write != read {
                self.pos[write] = self.pos[read];
                self.vel[write] = self.vel[read];
                self.extents[write] = self.extents[read];
                self.on_ground[write] = self.on_ground[read];
                self.is_ai[write] = self.is_ai[read];
                self.life[write] = self.life[read];
            }
            write += 1;
        }

        self.pos.truncate(write);
        self.vel.truncate(write);
        self.extents.truncate(write);
        self.on_ground.truncate(write);
        self.is_ai.truncate(write);
        self.life.truncate(write);
        self.debug_check_lengths();

        len - write
    }

    /// True when every attribute vector has the same length
    pub fn lengths_consistent(&self) -> bool {
        let n = self.pos.len();
        self.vel.len() == n
            && self.extents.len() == n
            && self.on_ground.len() == n
            && self.is_ai.len() == n
            && self.life.len() == n
    }

    #[inline]
    fn debug_check_lengths(&self) {
        debug_assert!(
            self.lengths_consistent(),
            "entity attribute vectors out of step"
        );
    }
}
