use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::tictactoe::{Board, Mark, select_best_move};

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.status().is_terminal() {
        let pos = select_best_move(&board, current_mark, current_mark.opponent())
            .expect("an unfinished board has an empty cell");
        board
            .place(pos, current_mark)
            .expect("the selected cell is empty");
        current_mark = current_mark.opponent();
    }
}

fn mid_game_board() -> Board {
    Board::from_rows([
        [Some(Mark::X), None, None],
        [None, Some(Mark::O), None],
        [None, None, Some(Mark::X)],
    ])
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("single_move_empty", |b| {
        let board = Board::new();
        b.iter(|| select_best_move(black_box(&board), Mark::X, Mark::O))
    });

    group.bench_function("single_move_mid_game", |b| {
        let board = mid_game_board();
        b.iter(|| select_best_move(black_box(&board), Mark::O, Mark::X))
    });

    group.bench_function("self_play_full_game", |b| {
        b.iter(bench_self_play_full_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
