//! Terminal presentation layer: pure view plus the crossterm renderer.

pub mod game_view;
pub mod renderer;

pub use game_view::{cell_glyph, render_rows, GameView};
pub use renderer::TerminalRenderer;
