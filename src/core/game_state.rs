//! Game state module - ties the simulation together
//!
//! Owns the world, player, camera and RNG, and runs the per-tick pipeline
//! in a fixed order: input intent, physics, tile effects, enemy motion,
//! camera, terminal checks. All state lives in this one context object;
//! nothing is global.

use crate::core::camera::Camera;
use crate::core::enemy::step_enemies;
use crate::core::physics::{self, Player};
use crate::core::rng::SimpleRng;
use crate::core::world::World;
use crate::types::{GameAction, Status, TileEvent, WIN_X};

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
    player: Player,
    camera: Camera,
    rng: SimpleRng,
    status: Status,
}

impl GameState {
    /// Create a new game with a procedurally generated world.
    /// The same seed always produces the same world and enemy motion.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let world = World::generate(&mut rng);
        Self::with_world(world, rng)
    }

    /// Create a game on a prepared world (scripted levels, tests).
    pub fn with_world(world: World, rng: SimpleRng) -> Self {
        Self {
            world,
            player: Player::new(),
            camera: Camera::new(),
            rng,
            status: Status::Running,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// A quit intent short-circuits the whole pipeline. Once the status is
    /// terminal, further ticks are no-ops.
    pub fn tick(&mut self, action: Option<GameAction>) {
        if self.status != Status::Running {
            return;
        }
        if action == Some(GameAction::Quit) {
            self.status = Status::Quit;
            return;
        }

        physics::step(&mut self.world, &mut self.player, action);

        let event = physics::resolve_tile(&mut self.world, &mut self.player, self.camera.offset);
        if event == TileEvent::Hurt && self.player.lives == 0 {
            self.status = Status::Lose;
            return;
        }

        step_enemies(&mut self.world, &self.camera, &mut self.rng);
        self.camera.update(self.player.x);

        if self.player.x >= WIN_X {
            self.status = Status::Win;
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }
}
