//! Camera module - maps the player column to a visible window offset
//!
//! The offset keeps the player roughly a third of the way into the window
//! and is recomputed from scratch every tick. No smoothing.

use crate::types::{VIEW_WIDTH, WORLD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Leftmost visible world column
    pub offset: i32,
}

impl Camera {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    /// Recompute the offset for the given player column
    pub fn update(&mut self, px: i32) {
        self.offset = (px - VIEW_WIDTH / 3).clamp(0, (WORLD_LENGTH - VIEW_WIDTH).max(0));
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
