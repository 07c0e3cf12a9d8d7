//! Terminal blockfall runner (default binary).
//!
//! Interactive mode uses crossterm for input and a full-redraw text renderer.
//! `--headless` runs a seeded auto-drop demo instead, for terminals without
//! raw-mode support and for CI.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Board, SimpleRng};
use blockfall::input::{should_quit, InputHandler};
use blockfall::session::Session;
use blockfall::term::{render_rows, GameView, TerminalRenderer};
use blockfall::types::TICK_MS;

#[derive(Debug, Parser)]
#[command(about = "Terminal falling-block puzzle")]
struct Args {
    /// Run a non-interactive text-mode demo
    #[arg(long)]
    headless: bool,

    /// Number of pieces to auto-drop in headless mode
    #[arg(long, default_value_t = 8)]
    pieces: u32,

    /// RNG seed (headless mode is reproducible for a given seed)
    #[arg(long, default_value_t = 0)]
    seed: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.headless || !std::io::stdout().is_terminal() {
        return run_headless(args.pieces, args.seed);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, args.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut session = Session::new(Box::new(SimpleRng::new(seed)));
    session.start();

    let view = GameView;
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&view.render(&session))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            session.apply_action(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats.
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            for action in input.update(TICK_MS) {
                session.apply_action(action);
            }
            session.tick(TICK_MS);
        }
    }
}

fn run_headless(pieces: u32, seed: u32) -> Result<()> {
    println!("Running the blockfall demo in text mode (seed {seed}).");

    let mut board = Board::new(Box::new(SimpleRng::new(seed)));
    if !board.spawn_piece() {
        bail!("failed to spawn the first piece");
    }

    for index in 0..pieces {
        let name = board.current().map(|p| p.tetromino.name).unwrap_or("-");
        println!("\npiece {}: {}", index + 1, name);
        println!("{}", render_rows(&board.as_rows()).join("\n"));

        board.hard_drop();
        if !board.spawn_piece() {
            println!("\nGame over - spawn area blocked.");
            break;
        }
    }

    println!("\nFinal state:");
    println!("{}", render_rows(&board.as_rows()).join("\n"));
    println!(
        "score: {}  lines: {}  level: {}",
        board.score(),
        board.lines_cleared(),
        board.level()
    );
    Ok(())
}
