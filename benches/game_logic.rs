use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, CycleRng};
use blockfall::session::Session;
use blockfall::types::TICK_MS;

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(Box::new(CycleRng::new()));
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(TICK_MS));
        })
    });
}

fn bench_spawn_and_drop(c: &mut Criterion) {
    c.bench_function("spawn_hard_drop_cycle", |b| {
        b.iter(|| {
            let mut board = Board::new(Box::new(CycleRng::new()));
            for _ in 0..8 {
                if !board.spawn_piece() {
                    break;
                }
                board.hard_drop();
            }
            black_box(board.score())
        })
    });
}

fn bench_clear_4_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(Box::new(CycleRng::new()));
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, true);
                }
            }
            black_box(board.clear_lines())
        })
    });
}

fn bench_as_rows(c: &mut Criterion) {
    let mut board = Board::new(Box::new(CycleRng::new()));
    board.spawn_piece();

    c.bench_function("as_rows_snapshot", |b| {
        b.iter(|| black_box(board.as_rows()))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(Box::new(CycleRng::new()));
    board.spawn_piece();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            board.move_piece(black_box(1), 0);
            board.move_piece(black_box(-1), 0);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_spawn_and_drop,
    bench_clear_4_lines,
    bench_as_rows,
    bench_move
);
criterion_main!(benches);
