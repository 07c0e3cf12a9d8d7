//! Board module - the stateful falling-block simulation.
//!
//! The board owns the occupancy grid (flat row-major storage, one byte per
//! cell, 0 = empty / 1 = locked), the current falling piece, the next-piece
//! lookahead, and the score/level/lines counters. Row 0 is the top. All rule
//! enforcement happens here: a piece becomes `current` only at a valid
//! position, and cells turn to 1 only by locking.

use crate::core::piece::FallingPiece;
use crate::core::pieces::{Tetromino, TETROMINOES};
use crate::core::rng::PieceRng;
use crate::core::scoring;
use crate::types::{CELL_CURRENT, CELL_EMPTY, CELL_GHOST, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat occupancy grid, row-major (y * width + x).
    grid: Vec<u8>,
    current: Option<FallingPiece>,
    next: &'static Tetromino,
    score: u32,
    level: u32,
    lines_cleared: u32,
    rng: Box<dyn PieceRng>,
}

impl Board {
    /// Create an empty board with the default 10x20 dimensions.
    pub fn new(rng: Box<dyn PieceRng>) -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT, rng)
    }

    /// Create an empty board with explicit dimensions. Dimensions are fixed
    /// for the lifetime of the board.
    pub fn with_size(width: usize, height: usize, mut rng: Box<dyn PieceRng>) -> Self {
        let next = draw_tetromino(rng.as_mut());
        Self {
            width,
            height,
            grid: vec![0; width * height],
            current: None,
            next,
            score: 0,
            level: 1,
            lines_cleared: 0,
            rng,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// The active falling piece, if any.
    pub fn current(&self) -> Option<FallingPiece> {
        self.current
    }

    /// The piece that the next spawn will produce.
    pub fn next_piece(&self) -> &'static Tetromino {
        self.next
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell occupancy at (x, y); None when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.grid[i])
    }

    /// Directly set a cell's occupancy. Test/debug scaffolding only; gameplay
    /// mutates the grid exclusively through locking and line clears.
    #[doc(hidden)]
    pub fn set_cell(&mut self, x: i32, y: i32, filled: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.grid[i] = u8::from(filled);
                true
            }
            None => false,
        }
    }

    /// Spawn the stored next piece at the top of the board, centered, and
    /// draw a fresh next piece from the catalog.
    ///
    /// Returns false when the spawn position is obstructed; `current` stays
    /// absent and retrying without clearing space will keep failing. That is
    /// the game-over signal.
    pub fn spawn_piece(&mut self) -> bool {
        let tetromino = self.next;
        self.next = draw_tetromino(self.rng.as_mut());

        let grid_width = tetromino.rotation(0)[0].len();
        let x = (self.width / 2) as i32 - (grid_width / 2) as i32;
        let piece = FallingPiece::new(tetromino, x, 0);

        if self.is_valid_position(&piece) {
            self.current = Some(piece);
            return true;
        }
        false
    }

    /// True iff every occupied cell of `piece` is in bounds and unfilled.
    pub fn is_valid_position(&self, piece: &FallingPiece) -> bool {
        piece
            .cells()
            .all(|(x, y)| matches!(self.cell(x, y), Some(v) if v == 0))
    }

    /// Try to shift the current piece by (dx, dy).
    ///
    /// A blocked downward move means the piece has landed: it locks in place
    /// (with line clearing and scoring) and the call returns false. A blocked
    /// horizontal or upward move leaves the state unchanged.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let moved = current.moved(dx, dy);
        if self.is_valid_position(&moved) {
            self.current = Some(moved);
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Try to rotate the current piece by `delta` rotation steps.
    ///
    /// An obstructed rotation is simply rejected; there are no kick attempts.
    pub fn rotate(&mut self, delta: i32) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let rotated = current.rotated(delta);
        if self.is_valid_position(&rotated) {
            self.current = Some(rotated);
            return true;
        }
        false
    }

    /// Drop the current piece straight down and lock it.
    pub fn hard_drop(&mut self) {
        while self.move_piece(0, 1) {}
    }

    /// Commit the current piece's cells into the grid, then clear any full
    /// rows and update the counters.
    ///
    /// Points for a clear use the level in effect during the drop: the score
    /// update happens before the level recompute.
    pub fn lock_piece(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };

        for (x, y) in current.cells() {
            if let Some(i) = self.index(x, y) {
                self.grid[i] = 1;
            }
        }

        let cleared = self.clear_lines();
        if cleared > 0 {
            self.lines_cleared += cleared as u32;
            self.score += scoring::line_clear_score(cleared, self.level);
            self.level = scoring::level_for_lines(self.lines_cleared);
        }
    }

    /// Remove every fully-filled row, compacting the remaining rows downward
    /// (relative order preserved) and refilling the top with empty rows.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        // Bottom-to-top two-pointer pass: full rows are skipped, the rest
        // slide down into place.
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.grid.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.grid[..write_y * width].fill(0);
        cleared
    }

    fn is_row_full(&self, y: usize) -> bool {
        let start = y * self.width;
        self.grid[start..start + self.width].iter().all(|&v| v != 0)
    }

    /// Where the current piece would land if hard-dropped now. Same x and
    /// rotation as `current`; never mutates the board.
    pub fn ghost_piece(&self) -> Option<FallingPiece> {
        let mut ghost = self.current?;
        while self.is_valid_position(&ghost.moved(0, 1)) {
            ghost = ghost.moved(0, 1);
        }
        Some(ghost)
    }

    /// Read-only render snapshot: height x width rows of cell codes
    /// (0 empty, 1 locked, 2 current piece, 3 ghost).
    ///
    /// The ghost is only painted over empty cells, so it never obscures
    /// locked cells or the piece itself.
    pub fn as_rows(&self) -> Vec<Vec<u8>> {
        let mut rows: Vec<Vec<u8>> = (0..self.height)
            .map(|y| self.grid[y * self.width..(y + 1) * self.width].to_vec())
            .collect();

        if let Some(current) = self.current {
            for (x, y) in current.cells() {
                if self.index(x, y).is_some() {
                    rows[y as usize][x as usize] = CELL_CURRENT;
                }
            }
        }

        if let Some(ghost) = self.ghost_piece() {
            for (x, y) in ghost.cells() {
                if self.index(x, y).is_some() && rows[y as usize][x as usize] == CELL_EMPTY {
                    rows[y as usize][x as usize] = CELL_GHOST;
                }
            }
        }

        rows
    }
}

fn draw_tetromino(rng: &mut dyn PieceRng) -> &'static Tetromino {
    let index = rng.next_index(TETROMINOES.len());
    &TETROMINOES[index % TETROMINOES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::CycleRng;

    fn board() -> Board {
        Board::new(Box::new(CycleRng::new()))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert_eq!(board.width(), DEFAULT_WIDTH);
        assert_eq!(board.height(), DEFAULT_HEIGHT);
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
        assert_eq!(board.lines_cleared(), 0);
        assert!(board.current().is_none());

        for y in 0..DEFAULT_HEIGHT as i32 {
            for x in 0..DEFAULT_WIDTH as i32 {
                assert_eq!(board.cell(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let board = board();
        assert_eq!(board.cell(-1, 0), None);
        assert_eq!(board.cell(0, -1), None);
        assert_eq!(board.cell(DEFAULT_WIDTH as i32, 0), None);
        assert_eq!(board.cell(0, DEFAULT_HEIGHT as i32), None);
    }

    #[test]
    fn test_with_size() {
        let board = Board::with_size(6, 8, Box::new(CycleRng::new()));
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 8);
        assert_eq!(board.cell(5, 7), Some(0));
        assert_eq!(board.cell(6, 0), None);
    }

    #[test]
    fn test_set_cell_bounds() {
        let mut board = board();
        assert!(board.set_cell(3, 5, true));
        assert_eq!(board.cell(3, 5), Some(1));
        assert!(board.set_cell(3, 5, false));
        assert_eq!(board.cell(3, 5), Some(0));
        assert!(!board.set_cell(-1, 0, true));
    }

    #[test]
    fn test_spawn_consumes_lookahead_in_order() {
        // CycleRng walks the catalog in order: the constructor draws I as the
        // lookahead, so spawns produce I, O, T, ...
        let mut board = board();
        assert_eq!(board.next_piece().name, "I");

        assert!(board.spawn_piece());
        assert_eq!(board.current().map(|p| p.tetromino.name), Some("I"));
        assert_eq!(board.next_piece().name, "O");
    }

    #[test]
    fn test_spawn_centers_piece() {
        let mut board = board();
        assert!(board.spawn_piece());
        let piece = board.current().expect("piece spawned");
        // I piece: 4-wide grid on a 10-wide board -> anchor x = 5 - 2 = 3.
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_clear_lines_counts_and_resets() {
        let mut board = board();
        for x in 0..DEFAULT_WIDTH as i32 {
            board.set_cell(x, 19, true);
            board.set_cell(x, 18, true);
        }
        board.set_cell(0, 17, true);

        assert_eq!(board.clear_lines(), 2);
        // The partial row slid to the bottom; the rest is empty.
        assert_eq!(board.cell(0, 19), Some(1));
        assert_eq!(board.cell(1, 19), Some(0));
        assert_eq!(board.cell(0, 18), Some(0));
    }

    #[test]
    fn test_clear_lines_preserves_row_order() {
        let mut board = board();
        for x in 0..DEFAULT_WIDTH as i32 {
            board.set_cell(x, 5, true);
            board.set_cell(x, 10, true);
            board.set_cell(x, 15, true);
        }
        board.set_cell(0, 4, true);
        board.set_cell(1, 9, true);
        board.set_cell(2, 14, true);

        assert_eq!(board.clear_lines(), 3);

        // Each marker drops by the number of full rows below it.
        assert_eq!(board.cell(0, 7), Some(1));
        assert_eq!(board.cell(1, 11), Some(1));
        assert_eq!(board.cell(2, 15), Some(1));

        // Exactly three fresh empty rows on top.
        for y in 0..3 {
            for x in 0..DEFAULT_WIDTH as i32 {
                assert_eq!(board.cell(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_mutating_calls_without_current_are_noops() {
        let mut board = board();
        assert!(!board.move_piece(0, 1));
        assert!(!board.rotate(1));
        board.hard_drop();
        board.lock_piece();
        assert_eq!(board.score(), 0);
        assert!(board.current().is_none());
    }
}
