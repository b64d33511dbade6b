//! Core types shared across the application
//! This module contains pure data types and tuning constants with no
//! external dependencies.

/// Visible window dimensions (world columns x rows shown per frame)
pub const VIEW_WIDTH: i32 = 60;
pub const VIEW_HEIGHT: i32 = 20;

/// Total world length in columns
pub const WORLD_LENGTH: i32 = 300;

/// Topmost row of the solid ground strip; the strip extends to the
/// bottom edge of the grid.
pub const GROUND_Y: i32 = VIEW_HEIGHT - 3;

/// Fixed timestep (20 Hz)
pub const TICK_MS: u64 = 50;

/// Vertical physics tuning
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = -6.0;
pub const STOMP_BOUNCE: f64 = -3.0;

/// World generation probabilities (independent Bernoulli trial per
/// column and per feature)
pub const BLOCK_CHANCE: f64 = 0.06;
pub const COIN_CHANCE: f64 = 0.08;
pub const ENEMY_CHANCE: f64 = 0.03;
pub const PILLAR_CHANCE: f64 = 0.02;

/// Feature-free safety margins at both ends of the world
pub const GEN_MARGIN_LEFT: i32 = 10;
pub const GEN_MARGIN_RIGHT: i32 = 5;

/// Per-enemy step probability per tick
pub const ENEMY_STEP_CHANCE: f64 = 0.02;

/// Score rewards
pub const COIN_SCORE: u32 = 10;
pub const STOMP_SCORE: u32 = 50;

/// Player spawn column and starting lives
pub const SPAWN_X: i32 = 2;
pub const START_LIVES: u32 = 3;

/// Reaching this column (or beyond) completes the run
pub const WIN_X: i32 = WORLD_LENGTH - 4;

/// Glyph drawn for the player
pub const PLAYER_GLYPH: char = 'M';

/// One cell of the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Ground,
    Block,
    Coin,
    Enemy,
}

impl Tile {
    /// Solid tiles block movement
    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Ground | Tile::Block)
    }

    /// Glyph used by the renderer
    pub fn glyph(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Ground => '=',
            Tile::Block => '#',
            Tile::Coin => 'o',
            Tile::Enemy => 'E',
        }
    }
}

/// Game actions decoded from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Jump,
    Quit,
}

/// Game loop state machine; everything but `Running` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Win,
    Lose,
    Quit,
}

/// Outcome of resolving the tile at the player's cell after movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    None,
    Coin,
    Stomp,
    Hurt,
}
