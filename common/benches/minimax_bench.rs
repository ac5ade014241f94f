use std::time::Duration;

use common::games::tictactoe::{Board, Mark, Roles, best_move};
use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

const BOT_X: Roles = Roles {
    human: Mark::O,
    bot: Mark::X,
};

const BOT_O: Roles = Roles {
    human: Mark::X,
    bot: Mark::O,
};

fn bench_single_move_empty_board() {
    let board = Board::new();
    let _ = best_move(&board, BOT_X);
}

fn bench_single_move_mid_game() {
    let board = Board::from_cells([
        Mark::X,
        Mark::Empty,
        Mark::Empty,
        Mark::Empty,
        Mark::O,
        Mark::Empty,
        Mark::Empty,
        Mark::Empty,
        Mark::X,
    ]);
    let _ = best_move(&board, BOT_O);
}

fn bench_full_game() {
    let mut board = Board::new();
    while !board.is_terminal() {
        let roles = if board.current_turn() == Mark::X {
            BOT_X
        } else {
            BOT_O
        };
        let Some(action) = best_move(&board, roles) else {
            break;
        };
        board = board.apply(action).unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
