//! Core module - pure game logic with no external dependencies
//!
//! This module contains the piece catalog, the falling-piece value type, the
//! board simulation, scoring, and the injected randomness seam. It has zero
//! dependencies on UI, timing, or I/O.

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use piece::FallingPiece;
pub use pieces::{RotationGrid, Tetromino, TETROMINOES};
pub use rng::{CycleRng, PieceRng, SimpleRng};
