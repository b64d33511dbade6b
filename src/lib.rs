//! Side-scrolling ASCII platformer for the terminal.
//!
//! The crate splits into a deterministic simulation core, a concurrent
//! keyboard capture layer, and a terminal rendering layer:
//!
//! - [`core`]: world generation, player physics, collision, tile effects,
//!   enemy motion and the camera, driven by [`core::GameState::tick`]
//! - [`input`]: a capture thread feeding a latest-key-wins atomic slot
//! - [`term`]: pure frame construction plus the crossterm-backed renderer
//! - [`types`]: shared data types and build-time tuning constants
//!
//! The binary in `main.rs` wires these into a fixed 50 ms tick loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
