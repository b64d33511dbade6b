//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything in here is deterministic for a given seed and runs headless,
//! so the full per-tick pipeline is unit-testable without a terminal.

pub mod camera;
pub mod enemy;
pub mod game_state;
pub mod physics;
pub mod rng;
pub mod world;

// Re-export commonly used types
pub use camera::Camera;
pub use game_state::GameState;
pub use physics::Player;
pub use rng::SimpleRng;
pub use world::World;
