//! Terminal module - turning simulation state into visible frames
//!
//! `GameView` stays pure and testable; `TerminalRenderer` is the only
//! place that touches the real terminal.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use frame::Frame;
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
