//! Blockfall: a falling-block puzzle game.
//!
//! The simulation core (`core`) is pure and deterministic - piece catalog,
//! falling-piece value type, board rules, scoring, and an injected randomness
//! seam. Everything else is thin shell: session pacing, key binding, and a
//! terminal view.

pub mod core;
pub mod input;
pub mod session;
pub mod term;
pub mod types;
