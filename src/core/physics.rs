//! Physics module - player movement, grid collision and tile effects
//!
//! Resolution is strictly sequential each tick: horizontal step, jump,
//! gravity, then vertical resolution. Diagonal collisions are never
//! checked as a combined step; this matches simple grid-platformer
//! conventions and keeps every branch independently testable.

use crate::core::world::World;
use crate::types::{
    GameAction, Tile, TileEvent, COIN_SCORE, GRAVITY, GROUND_Y, JUMP_IMPULSE, SPAWN_X,
    START_LIVES, STOMP_BOUNCE, STOMP_SCORE, VIEW_HEIGHT, WORLD_LENGTH,
};

/// The player-controlled character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// World column
    pub x: i32,
    /// Row, 0 at the top
    pub y: i32,
    /// Vertical velocity in rows per tick; negative is up
    pub vy: f64,
    pub on_ground: bool,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    /// Spawn standing on the ground at the start of the world
    pub fn new() -> Self {
        Self {
            x: SPAWN_X,
            y: GROUND_Y - 1,
            vy: 0.0,
            on_ground: true,
            lives: START_LIVES,
            score: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance the player one tick against the grid.
///
/// The world is mutable because rising into a `Block` bumps it (clears the
/// block and may spawn a coin above it).
pub fn step(world: &mut World, player: &mut Player, action: Option<GameAction>) {
    match action {
        Some(GameAction::MoveLeft) => walk(world, player, -1),
        Some(GameAction::MoveRight) => walk(world, player, 1),
        Some(GameAction::Jump) => {
            if player.on_ground {
                player.vy = JUMP_IMPULSE;
                player.on_ground = false;
            }
        }
        _ => {}
    }

    // Gravity applies every tick, grounded or not; the fall branch below
    // immediately re-lands a resting player at the same cell.
    player.vy += GRAVITY;
    resolve_vertical(world, player);
}

/// Horizontal step: only the cell at the player's current row is checked.
fn walk(world: &World, player: &mut Player, dx: i32) {
    let target = (player.x + dx).clamp(0, WORLD_LENGTH - 1);
    if !world.is_solid(target, player.y) {
        player.x = target;
    }
}

fn resolve_vertical(world: &mut World, player: &mut Player) {
    let candidate = (player.y as f64 + player.vy).round() as i32;

    if player.vy > 0.0 {
        // Falling: land on top of the first solid cell, or keep dropping.
        if world.is_solid(player.x, candidate) {
            player.y = landing_row(world, player.x, player.y, candidate);
            player.vy = 0.0;
            player.on_ground = true;
        } else {
            player.y = candidate;
            player.on_ground = false;
        }
    } else if player.vy < 0.0 {
        // Rising: a solid cell stops the ascent; a Block also gets bumped.
        if world.is_solid(player.x, candidate) {
            player.vy = 0.0;
            player.on_ground = false;
            if world.get(player.x, candidate) == Some(Tile::Block) {
                world.set(player.x, candidate, Tile::Empty);
                if world.get(player.x, candidate - 1) == Some(Tile::Empty) {
                    world.set(player.x, candidate - 1, Tile::Coin);
                }
            }
        } else {
            player.y = candidate;
            player.on_ground = false;
        }
    }
}

/// Highest non-solid row strictly above the first solid cell between the
/// current row and the attempted row.
fn landing_row(world: &World, x: i32, from_y: i32, attempted: i32) -> i32 {
    let limit = attempted.min(VIEW_HEIGHT - 1);
    for y in from_y.max(0)..=limit {
        if world.is_solid(x, y + 1) {
            return y;
        }
    }
    (attempted - 1).clamp(0, VIEW_HEIGHT - 2)
}

/// Resolve the tile at the player's cell after movement.
///
/// Coins are collected; an enemy is stomped when the player is still moving
/// downward, otherwise it deals damage and the player respawns at the left
/// edge of the visible window. Returns what happened so the caller can
/// update the loop state (a fatal hit is a `Hurt` with `lives == 0`).
pub fn resolve_tile(world: &mut World, player: &mut Player, camera_offset: i32) -> TileEvent {
    match world.get(player.x, player.y) {
        Some(Tile::Coin) => {
            player.score += COIN_SCORE;
            world.set(player.x, player.y, Tile::Empty);
            TileEvent::Coin
        }
        Some(Tile::Enemy) => {
            if player.vy > 0.0 {
                player.score += STOMP_SCORE;
                world.set(player.x, player.y, Tile::Empty);
                player.vy = STOMP_BOUNCE;
                TileEvent::Stomp
            } else {
                player.lives = player.lives.saturating_sub(1);
                player.x = (camera_offset + 2).max(0);
                player.y = GROUND_Y - 1;
                player.vy = 0.0;
                player.on_ground = true;
                TileEvent::Hurt
            }
        }
        _ => TileEvent::None,
    }
}
