//! World module - the static tile grid
//!
//! The world is a VIEW_HEIGHT x WORLD_LENGTH grid generated once at startup.
//! Uses a flat array for better cache locality.
//! Coordinates: (x, y) where x ranges over world columns (left to right)
//! and y over rows (top to bottom). Dimensions never change after creation.

use crate::core::rng::SimpleRng;
use crate::types::{
    Tile, BLOCK_CHANCE, COIN_CHANCE, ENEMY_CHANCE, GEN_MARGIN_LEFT, GEN_MARGIN_RIGHT, GROUND_Y,
    PILLAR_CHANCE, VIEW_HEIGHT, WORLD_LENGTH,
};

/// Total number of cells in the grid
const WORLD_SIZE: usize = (VIEW_HEIGHT * WORLD_LENGTH) as usize;

/// The tile grid, row-major order (y * WORLD_LENGTH + x)
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    tiles: Vec<Tile>,
}

impl World {
    /// Create an empty world (no ground, no features)
    pub fn new() -> Self {
        Self {
            tiles: vec![Tile::Empty; WORLD_SIZE],
        }
    }

    /// Generate a playable world from the given RNG.
    ///
    /// Lays a solid ground strip along the bottom three rows, then rolls
    /// independent trials per column for a floating block, a floating coin,
    /// a ground-level enemy, and a two-tile block pillar. The trial order is
    /// fixed so a given RNG state always yields the same grid. A pillar
    /// rolled in the same column overwrites an enemy placed there.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut world = Self::new();

        for x in 0..WORLD_LENGTH {
            for y in GROUND_Y..VIEW_HEIGHT {
                world.set(x, y, Tile::Ground);
            }
        }

        for x in GEN_MARGIN_LEFT..WORLD_LENGTH - GEN_MARGIN_RIGHT {
            if rng.chance(BLOCK_CHANCE) {
                world.set(x, GROUND_Y - 2, Tile::Block);
            }
            if rng.chance(COIN_CHANCE) {
                world.set(x, GROUND_Y - 4, Tile::Coin);
            }
            if rng.chance(ENEMY_CHANCE) {
                world.set(x, GROUND_Y - 1, Tile::Enemy);
            }
            if rng.chance(PILLAR_CHANCE) {
                world.set(x, GROUND_Y - 1, Tile::Block);
                world.set(x, GROUND_Y - 2, Tile::Block);
            }
        }

        world
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WORLD_LENGTH || y < 0 || y >= VIEW_HEIGHT {
            return None;
        }
        Some((y as usize) * (WORLD_LENGTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        WORLD_LENGTH
    }

    pub fn height(&self) -> i32 {
        VIEW_HEIGHT
    }

    /// Get tile at (x, y); None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set tile at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks movement. Out-of-bounds counts as solid so
    /// clamped movement can never escape the grid.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, |t| t.is_solid())
    }

    /// Count tiles of a given kind (test and bench helper)
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
