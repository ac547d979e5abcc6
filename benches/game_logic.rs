use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{calculate_difficulty_progress, GameSession, Grid};
use blockfall::types::{Direction, PieceKind};

fn bench_gravity_step(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.initialize_game(0);
    let mut now = 0u64;

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            now += 16;
            session.gravity_step(black_box(now));
            if session.game_over() {
                session.reset_game(now);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.initialize_game(0);
    let mut now = 0u64;

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            now += 100;
            session.hard_drop(black_box(now));
            if session.game_over() {
                session.reset_game(now);
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.initialize_game(0);

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            session.move_piece(black_box(Direction::Right), 0);
            session.move_piece(black_box(Direction::Left), 0);
        })
    });
}

fn bench_difficulty(c: &mut Criterion) {
    c.bench_function("difficulty_progress", |b| {
        b.iter(|| {
            calculate_difficulty_progress(
                black_box(100.0),
                black_box(2),
                black_box(3),
                black_box(200),
            )
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.initialize_game(0);

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_difficulty,
    bench_snapshot
);
criterion_main!(benches);
