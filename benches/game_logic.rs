use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, Shape};
use blockfall::term::{encode_diff_into, GameView, Viewport};
use blockfall::types::{Command, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_rotate_shape(c: &mut Criterion) {
    let shape = Shape::from_kind(ShapeKind::L);

    c.bench_function("rotated_cw", |b| {
        b.iter(|| black_box(black_box(shape).rotated_cw()))
    });
}

fn bench_commands(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.handle_command(black_box(Command::MoveRight));
            state.handle_command(black_box(Command::Rotate));
            state.handle_command(black_box(Command::MoveLeft));
        })
    });
}

fn bench_hard_game(c: &mut Criterion) {
    c.bench_function("play_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::seeded(black_box(7));
            while !state.game_over() {
                state.tick(501);
            }
            black_box(state.score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::seeded(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let prev = view.render(&state.snapshot(), viewport);
    let mut next = prev.clone();
    let mut out = Vec::with_capacity(16 * 1024);

    c.bench_function("render_and_diff", |b| {
        b.iter(|| {
            view.render_into(&state.snapshot(), viewport, &mut next);
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate_shape,
    bench_commands,
    bench_hard_game,
    bench_render
);
criterion_main!(benches);
