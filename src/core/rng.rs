//! RNG module - injected piece randomness.
//!
//! Piece selection is a constructor-time dependency of the board so that
//! deterministic sequences can be substituted in tests and demos. The
//! production source is a simple LCG; `CycleRng` walks the catalog in order.

/// A uniform-choice capability: the next index among `count` catalog entries.
pub trait PieceRng: std::fmt::Debug {
    fn next_index(&mut self, count: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl PieceRng for SimpleRng {
    fn next_index(&mut self, count: usize) -> usize {
        self.next_range(count as u32) as usize
    }
}

/// Deterministic source that cycles through catalog indices in order.
///
/// Intended for tests and reproducible demos.
#[derive(Debug, Clone, Default)]
pub struct CycleRng {
    next: usize,
}

impl CycleRng {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PieceRng for CycleRng {
    fn next_index(&mut self, count: usize) -> usize {
        let index = self.next % count;
        self.next = self.next.wrapping_add(1);
        index
    }
}
