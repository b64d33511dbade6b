//! Terminal platformer runner.
//!
//! Fixed 20 Hz tick loop: consume the latest key, advance the simulation,
//! draw, sleep out the remainder of the tick budget. An optional first
//! argument seeds the world for reproducible runs.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_scroller::core::GameState;
use tui_scroller::input::{action_for, InputListener};
use tui_scroller::term::{Frame, GameView, TerminalRenderer};
use tui_scroller::types::{Status, TICK_MS};

fn main() -> Result<()> {
    let seed = seed_from_args();

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let input = InputListener::spawn();

    let result = run(&mut term, &input, seed);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();
    input.shutdown();

    let game = result?;
    match game.status() {
        Status::Win => println!("YOU WIN! Final score: {}", game.score()),
        Status::Lose => println!(
            "Game over. Score: {}  Lives: {}",
            game.score(),
            game.lives()
        ),
        Status::Quit | Status::Running => println!("Quit. Score: {}", game.score()),
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, input: &InputListener, seed: u32) -> Result<GameState> {
    let mut game = GameState::new(seed);
    let view = GameView::new();
    let mut frame = Frame::new();
    let tick_duration = Duration::from_millis(TICK_MS);

    while game.status() == Status::Running {
        let tick_start = Instant::now();

        let action = input.take_key().and_then(action_for);
        game.tick(action);

        // A quit skips the frame; win and lose still show their last frame.
        if game.status() == Status::Quit {
            break;
        }

        view.render_into(game.world(), game.player(), game.camera(), &mut frame);
        term.draw(&frame)?;

        // Sleep out the rest of the budget; if the tick ran over, start the
        // next one immediately and let the frame rate drop.
        if let Some(remaining) = tick_duration.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    Ok(game)
}

/// First CLI argument as the world seed, otherwise clock-derived.
fn seed_from_args() -> u32 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
}
