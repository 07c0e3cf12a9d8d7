//! Game session - pacing wrapper around the core board.
//!
//! The session owns the drop timer and the pause/game-over flags, and is the
//! single driver of board mutation. The board itself knows nothing about
//! time; the session converts elapsed milliseconds into gravity steps whose
//! cadence shrinks as the level rises.

use crate::core::{scoring, Board, PieceRng};
use crate::types::GameAction;

#[derive(Debug)]
pub struct Session {
    board: Board,
    drop_timer_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl Session {
    pub fn new(rng: Box<dyn PieceRng>) -> Self {
        Self {
            board: Board::new(rng),
            drop_timer_ms: 0,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Spawn the first piece. Does nothing on a session already started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if !self.board.spawn_piece() {
            self.game_over = true;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval, derived from the board's level.
    pub fn drop_interval_ms(&self) -> u32 {
        scoring::drop_interval_ms(self.board.level())
    }

    /// Advance the session clock. Applies one gravity step when the drop
    /// timer fires; after a lock, the replacement piece spawns on the next
    /// firing (a failed spawn ends the game). Returns true when the board
    /// advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.board.move_piece(0, 1) && self.board.current().is_none() {
            if !self.board.spawn_piece() {
                self.game_over = true;
            }
        }
        true
    }

    /// Route a game action to the board. Gameplay actions are ignored while
    /// paused or after game over; pause itself always toggles until the game
    /// ends. Returns whether the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            _ if !self.started || self.paused || self.game_over => false,
            GameAction::MoveLeft => self.board.move_piece(-1, 0),
            GameAction::MoveRight => self.board.move_piece(1, 0),
            GameAction::SoftDrop => self.board.move_piece(0, 1),
            GameAction::HardDrop => {
                if self.board.current().is_none() {
                    return false;
                }
                self.board.hard_drop();
                true
            }
            GameAction::RotateCw => self.board.rotate(1),
            GameAction::RotateCcw => self.board.rotate(-1),
        }
    }
}
