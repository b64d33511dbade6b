//! GameView: maps simulation state into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Camera, Player, World};
use crate::term::frame::Frame;
use crate::types::{PLAYER_GLYPH, VIEW_HEIGHT, VIEW_WIDTH, WORLD_LENGTH};

/// Renders one frame: a HUD header, the visible window of the world with
/// the player glyph overlaid, and a controls footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing frame, replacing its contents.
    pub fn render_into(&self, world: &World, player: &Player, camera: &Camera, frame: &mut Frame) {
        frame.clear();

        frame.push_line(format!(
            "Score: {}  Lives: {}  Pos: {}/{}",
            player.score,
            player.lives,
            player.x,
            WORLD_LENGTH - 1
        ));

        for row in 0..VIEW_HEIGHT {
            let mut line = String::with_capacity(VIEW_WIDTH as usize);
            for col in camera.offset..camera.offset + VIEW_WIDTH {
                if row == player.y && col == player.x {
                    line.push(PLAYER_GLYPH);
                } else {
                    line.push(world.get(col, row).map_or(' ', |t| t.glyph()));
                }
            }
            frame.push_line(line);
        }

        frame.push_line(String::new());
        frame.push_line("a/left: move left  d/right: move right  w/space: jump  q: quit".to_string());
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, world: &World, player: &Player, camera: &Camera) -> Frame {
        let mut frame = Frame::new();
        self.render_into(world, player, camera, &mut frame);
        frame
    }
}
