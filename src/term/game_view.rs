//! GameView: maps the session state into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::session::Session;
use crate::types::{CELL_CURRENT, CELL_EMPTY, CELL_GHOST, CELL_LOCKED};

/// Glyph for one board cell code, two columns wide to compensate for the
/// terminal glyph aspect ratio.
pub fn cell_glyph(code: u8) -> &'static str {
    match code {
        CELL_EMPTY => " .",
        CELL_LOCKED => " █",
        CELL_CURRENT => " ▓",
        CELL_GHOST => " ░",
        _ => " ?",
    }
}

/// Render a cell-code grid as plain text rows. Shared by the interactive
/// view and the headless demo.
pub fn render_rows(rows: &[Vec<u8>]) -> Vec<String> {
    rows.iter()
        .map(|row| row.iter().map(|&code| cell_glyph(code)).collect())
        .collect()
}

/// Text projection of a running session: header, controls, board with
/// next-piece preview, and status banners.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, session: &Session) -> Vec<String> {
        let board = session.board();
        let mut lines = vec![
            "Blockfall".to_string(),
            format!("Score: {}", board.score()),
            format!("Level: {}", board.level()),
            format!("Lines: {}", board.lines_cleared()),
            String::new(),
            "Controls: ← → move, ↑ rotate, z ccw, ↓ soft drop, space hard drop".to_string(),
            "          p pause, q quit".to_string(),
            String::new(),
        ];

        let mut board_lines = render_rows(&board.as_rows());
        let gutter = "    ";

        // Next-piece preview to the right of the board, like the side panel
        // of a cabinet.
        if let Some(line) = board_lines.first_mut() {
            line.push_str(gutter);
            line.push_str("Next:");
        }
        let preview = board.next_piece().rotation(0);
        for (i, row) in preview.iter().enumerate() {
            if let Some(line) = board_lines.get_mut(i + 2) {
                line.push_str(gutter);
                for &cell in row.iter() {
                    line.push_str(if cell != 0 { " █" } else { "  " });
                }
            }
        }

        lines.extend(board_lines);

        if session.paused() {
            lines.push(String::new());
            lines.push("Paused - press p to resume".to_string());
        } else if session.game_over() {
            lines.push(String::new());
            lines.push("Game over - press q to exit".to_string());
        }

        lines
    }
}
