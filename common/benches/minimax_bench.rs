use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    BotInput, COMPUTER_MARK, Board, Difficulty, Mark, calculate_minimax_move, calculate_move,
};

fn bench_minimax_empty_board() {
    let input = BotInput::new(Board::new(), Mark::X);
    black_box(calculate_minimax_move(&input));
}

fn bench_minimax_after_first_move() {
    let mut board = Board::new();
    board.place(4, Mark::X).expect("legal move");
    let input = BotInput::new(board, COMPUTER_MARK);
    black_box(calculate_minimax_move(&input));
}

fn bench_full_game_hard() {
    let mut board = Board::new();
    let mut rng = SessionRng::new(2024);
    let mut mark = Mark::X;

    while !board.outcome().is_over() {
        let input = BotInput::new(board, mark);
        let Ok(index) = calculate_move(&input, Difficulty::Hard, &mut rng) else {
            break;
        };
        board.place(index, mark).expect("legal move");
        mark = mark.opponent().unwrap_or(Mark::X);
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("empty_board", |b| b.iter(bench_minimax_empty_board));
    group.bench_function("after_center_opening", |b| b.iter(bench_minimax_after_first_move));
    group.bench_function("self_play_hard", |b| b.iter(bench_full_game_hard));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
