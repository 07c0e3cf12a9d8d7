//! Piece catalog - the 7 standard tetromino shapes.
//!
//! Rotation states are hand-authored occupancy grids in the canonical SRS
//! layout (no wall kicks). They are tables rather than computed transforms:
//! bounding boxes intentionally differ between pieces (I uses 4x4, O uses
//! 2x2, the rest 3x3), and each rotation grid stands on its own.

/// One rotation state: a fixed 2-D binary grid, 1 = filled cell.
pub type RotationGrid = &'static [&'static [u8]];

/// A tetromino definition: a name and its ordered rotation states.
#[derive(Debug)]
pub struct Tetromino {
    pub name: &'static str,
    pub rotations: &'static [RotationGrid],
}

impl Tetromino {
    /// Rotation grid at `index`, wrapped modulo the rotation count.
    pub fn rotation(&self, index: usize) -> RotationGrid {
        self.rotations[index % self.rotations.len()]
    }

    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }
}

/// The fixed, ordered catalog. Read-only for the lifetime of the process.
pub static TETROMINOES: [Tetromino; 7] = [
    Tetromino {
        name: "I",
        rotations: &[
            &[
                &[0, 0, 0, 0], //
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ],
            &[
                &[0, 1, 0, 0], //
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
            ],
        ],
    },
    Tetromino {
        name: "O",
        rotations: &[&[
            &[1, 1], //
            &[1, 1],
        ]],
    },
    Tetromino {
        name: "T",
        rotations: &[
            &[
                &[0, 1, 0], //
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            &[
                &[0, 1, 0], //
                &[0, 1, 1],
                &[0, 1, 0],
            ],
            &[
                &[0, 0, 0], //
                &[1, 1, 1],
                &[0, 1, 0],
            ],
            &[
                &[0, 1, 0], //
                &[1, 1, 0],
                &[0, 1, 0],
            ],
        ],
    },
    Tetromino {
        name: "S",
        rotations: &[
            &[
                &[0, 1, 1], //
                &[1, 1, 0],
                &[0, 0, 0],
            ],
            &[
                &[0, 1, 0], //
                &[0, 1, 1],
                &[0, 0, 1],
            ],
        ],
    },
    Tetromino {
        name: "Z",
        rotations: &[
            &[
                &[1, 1, 0], //
                &[0, 1, 1],
                &[0, 0, 0],
            ],
            &[
                &[0, 0, 1], //
                &[0, 1, 1],
                &[0, 1, 0],
            ],
        ],
    },
    Tetromino {
        name: "J",
        rotations: &[
            &[
                &[1, 0, 0], //
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            &[
                &[0, 1, 1], //
                &[0, 1, 0],
                &[0, 1, 0],
            ],
            &[
                &[0, 0, 0], //
                &[1, 1, 1],
                &[0, 0, 1],
            ],
            &[
                &[0, 1, 0], //
                &[0, 1, 0],
                &[1, 1, 0],
            ],
        ],
    },
    Tetromino {
        name: "L",
        rotations: &[
            &[
                &[0, 0, 1], //
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            &[
                &[0, 1, 0], //
                &[0, 1, 0],
                &[0, 1, 1],
            ],
            &[
                &[0, 0, 0], //
                &[1, 1, 1],
                &[1, 0, 0],
            ],
            &[
                &[1, 1, 0], //
                &[0, 1, 0],
                &[0, 1, 0],
            ],
        ],
    },
];
