use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gess_engine::board::{Board, Color, Coord};
use gess_engine::notation::{format_board, parse_board};
use gess_engine::rules::{ring_census, validate};
use gess_engine::GameEngine;

fn bench_ring_census(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("ring_census_initial", |b| {
        b.iter(|| ring_census(black_box(&board)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let board = Board::initial();
    let source = Coord::new(7, 6);
    let dest = Coord::new(8, 6);
    c.bench_function("validate_pawn_push", |b| {
        b.iter(|| {
            validate(
                black_box(&board),
                Color::Black,
                black_box(source),
                black_box(dest),
            )
        })
    });
}

fn bench_full_move(c: &mut Criterion) {
    let engine = GameEngine::new();
    c.bench_function("apply_move_with_shadow_census", |b| {
        b.iter(|| {
            let mut game = engine.clone();
            game.apply_move(black_box("h7"), black_box("i7")).unwrap()
        })
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

fn bench_notation(c: &mut Criterion) {
    let board = Board::initial();
    let notation = format_board(&board);
    c.bench_function("notation_format", |b| {
        b.iter(|| format_board(black_box(&board)))
    });
    c.bench_function("notation_parse", |b| {
        b.iter(|| parse_board(black_box(&notation)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_ring_census,
    bench_validate,
    bench_full_move,
    bench_board_clone,
    bench_notation,
);
criterion_main!(benches);
