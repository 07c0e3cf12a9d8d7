//! Input binding - key events to game actions, with held-key repeat.
//!
//! Held horizontal movement and soft drop repeat after a DAS delay at an ARR
//! rate. Terminals that never emit key-release events get a timeout-based
//! auto-release so a single tap does not turn into a sustained hold.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS};

const AUTO_RELEASE_TIMEOUT_MS: u32 = 150;

/// Quit keys: q, Esc, Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

/// DAS/ARR accumulator for one held key.
#[derive(Debug, Clone, Copy, Default)]
struct Repeat {
    das_timer_ms: u32,
    arr_acc_ms: u32,
}

impl Repeat {
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by `elapsed_ms` and return how many repeats fired.
    fn advance(&mut self, elapsed_ms: u32, das_ms: u32, arr_ms: u32) -> u32 {
        let before = self.das_timer_ms;
        self.das_timer_ms += elapsed_ms;
        if self.das_timer_ms < das_ms {
            return 0;
        }

        // Only the time past the DAS threshold counts toward repeats.
        let excess = if before < das_ms {
            self.das_timer_ms - das_ms
        } else {
            elapsed_ms
        };
        self.arr_acc_ms += excess;

        let fired = self.arr_acc_ms / arr_ms;
        self.arr_acc_ms %= arr_ms;
        fired
    }
}

/// Tracks held keys and produces repeat actions each tick.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Option<GameAction>,
    soft_drop_held: bool,
    last_press: Instant,
    horizontal_repeat: Repeat,
    soft_drop_repeat: Repeat,
    das_ms: u32,
    arr_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            horizontal: None,
            soft_drop_held: false,
            last_press: Instant::now(),
            horizontal_repeat: Repeat::default(),
            soft_drop_repeat: Repeat::default(),
            das_ms,
            arr_ms,
        }
    }

    /// Map a key press to an action, updating held-key state.
    ///
    /// Re-pressing an already-held movement key returns None; the repeats
    /// come from `update`.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left => self.press_horizontal(GameAction::MoveLeft),
            KeyCode::Right => self.press_horizontal(GameAction::MoveRight),
            KeyCode::Down => {
                self.last_press = Instant::now();
                if self.soft_drop_held {
                    return None;
                }
                self.soft_drop_held = true;
                self.soft_drop_repeat.reset();
                Some(GameAction::SoftDrop)
            }
            KeyCode::Up => Some(GameAction::RotateCw),
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
            _ => None,
        }
    }

    fn press_horizontal(&mut self, action: GameAction) -> Option<GameAction> {
        self.last_press = Instant::now();
        if self.horizontal == Some(action) {
            return None;
        }
        self.horizontal = Some(action);
        self.horizontal_repeat.reset();
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.release_horizontal(GameAction::MoveLeft),
            KeyCode::Right => self.release_horizontal(GameAction::MoveRight),
            KeyCode::Down => {
                self.soft_drop_held = false;
                self.soft_drop_repeat.reset();
            }
            _ => {}
        }
    }

    fn release_horizontal(&mut self, action: GameAction) {
        if self.horizontal == Some(action) {
            self.horizontal = None;
            self.horizontal_repeat.reset();
        }
    }

    /// Advance the repeat timers and collect the actions due this tick.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::new();

        // Auto-release stale holds when the terminal never sends releases.
        if self.last_press.elapsed().as_millis() as u32 > AUTO_RELEASE_TIMEOUT_MS {
            self.horizontal = None;
            self.horizontal_repeat.reset();
            self.soft_drop_held = false;
            self.soft_drop_repeat.reset();
        }

        if let Some(action) = self.horizontal {
            let fired = self
                .horizontal_repeat
                .advance(elapsed_ms, self.das_ms, self.arr_ms);
            for _ in 0..fired {
                let _ = actions.try_push(action);
            }
        } else {
            self.horizontal_repeat.reset();
        }

        if self.soft_drop_held {
            // Soft drop has no DAS: it repeats as soon as ARR time accrues.
            let fired = self.soft_drop_repeat.advance(elapsed_ms, 0, SOFT_DROP_ARR_MS);
            for _ in 0..fired {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        } else {
            self.soft_drop_repeat.reset();
        }

        actions
    }

    #[cfg(test)]
    fn hold_forever(mut self) -> Self {
        // Push the auto-release horizon out of reach for timing tests.
        self.last_press = Instant::now() + std::time::Duration::from_secs(3600);
        self
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
