//! Input module - concurrent keyboard capture and key mapping
//!
//! The listener thread is the only producer and the game loop the only
//! consumer; they share exactly one atomic slot.

pub mod listener;
pub mod map;

pub use listener::{InputListener, Key, KeySlot};
pub use map::action_for;
