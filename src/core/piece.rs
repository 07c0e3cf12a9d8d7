//! FallingPiece - the active tetromino as a plain value.
//!
//! A falling piece is a catalog reference plus a rotation index and a grid
//! anchor (top-left corner of the rotation grid). `moved` and `rotated`
//! return transformed copies without checking validity; the board decides
//! whether to adopt them.

use crate::core::pieces::{RotationGrid, Tetromino};

#[derive(Debug, Clone, Copy)]
pub struct FallingPiece {
    pub tetromino: &'static Tetromino,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl FallingPiece {
    pub fn new(tetromino: &'static Tetromino, x: i32, y: i32) -> Self {
        Self {
            tetromino,
            rotation: 0,
            x,
            y,
        }
    }

    /// The rotation grid for the current rotation index.
    pub fn grid(&self) -> RotationGrid {
        self.tetromino.rotation(self.rotation)
    }

    /// Absolute board coordinates occupied by the piece.
    ///
    /// Lazy and restartable; each call walks the rotation grid afresh.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x, y) = (self.x, self.y);
        self.grid().iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(dx, _)| (x + dx as i32, y + dy as i32))
        })
    }

    /// A copy with the rotation index advanced by `delta`, wrapped modulo the
    /// rotation count. Negative deltas rotate counter-clockwise.
    pub fn rotated(&self, delta: i32) -> Self {
        let count = self.tetromino.rotation_count() as i32;
        let rotation = (self.rotation as i32 + delta).rem_euclid(count) as usize;
        Self { rotation, ..*self }
    }

    /// A copy with the anchor shifted by (dx, dy).
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
