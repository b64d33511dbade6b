//! Enemy module - random walk of enemy tiles within the visible window
//!
//! Enemies have no identity beyond their cell; a move clears the source
//! cell and marks the destination. Only the cell directly below the
//! destination is checked for support, so an enemy can still step onto a
//! lone solid cell beside a drop. That is long-standing behavior, keep it.

use crate::core::camera::Camera;
use crate::core::rng::SimpleRng;
use crate::core::world::World;
use crate::types::{Tile, ENEMY_STEP_CHANCE, VIEW_HEIGHT, VIEW_WIDTH, WORLD_LENGTH};

/// Advance every enemy currently in view by at most one column.
pub fn step_enemies(world: &mut World, camera: &Camera, rng: &mut SimpleRng) {
    let end = (camera.offset + VIEW_WIDTH).min(WORLD_LENGTH);
    for x in camera.offset..end {
        for y in 0..VIEW_HEIGHT {
            if world.get(x, y) != Some(Tile::Enemy) {
                continue;
            }
            if !rng.chance(ENEMY_STEP_CHANCE) {
                continue;
            }
            let dir = if rng.next_bool() { 1 } else { -1 };
            let nx = x + dir;
            if world.get(nx, y) == Some(Tile::Empty) && world.is_solid(nx, y + 1) {
                world.set(x, y, Tile::Empty);
                world.set(nx, y, Tile::Enemy);
            }
        }
    }
}
