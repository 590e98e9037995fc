use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use tictactoe_engine::game::{Board, Mark, Outcome, choose_move, evaluate};

const E: Mark = Mark::Empty;
const X: Mark = Mark::X;
const O: Mark = Mark::O;

fn bench_first_move_empty_board() {
    let board = Board::new();
    choose_move(&board, X, O).unwrap();
}

fn bench_single_move_mid_game() {
    let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
    choose_move(&board, O, X).unwrap();
}

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut mover = X;
    while evaluate(&board) == Outcome::Undecided {
        let index = choose_move(&board, mover, mover.opponent().unwrap()).unwrap();
        board.place(index, mover).unwrap();
        mover = mover.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("first_move_empty", |b| b.iter(bench_first_move_empty_board));

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("self_play_full_game", |b| b.iter(bench_self_play_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
