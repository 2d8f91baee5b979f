use criterion::{Criterion, criterion_group, criterion_main};
use common::games::SessionRng;
use common::games::tictactoe::{Board, BotType, Mark, Position, calculate_move};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        let mut rng = SessionRng::new(1);
        b.iter(|| calculate_move(BotType::Minimax, &Board::new(), Mark::X, &mut rng));
    });
}

fn bench_minimax_after_opening(c: &mut Criterion) {
    c.bench_function("minimax_after_corner_opening", |b| {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Mark::X);
        let mut rng = SessionRng::new(1);
        b.iter(|| calculate_move(BotType::Minimax, &board, Mark::O, &mut rng));
    });
}

fn bench_full_game(c: &mut Criterion) {
    for bot_type in [BotType::Random, BotType::Heuristic, BotType::Minimax] {
        c.bench_function(&format!("{:?}_self_play_game", bot_type), |b| {
            let mut rng = SessionRng::new(7);
            b.iter(|| {
                let mut board = Board::new();
                let mut mark = Mark::X;
                while let Some(pos) = calculate_move(bot_type, &board, mark, &mut rng) {
                    board.set(pos, mark);
                    if common::games::tictactoe::check_win(&board).is_some() {
                        break;
                    }
                    mark = mark.opponent().unwrap();
                }
                board
            });
        });
    }
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_after_opening,
    bench_full_game
);
criterion_main!(benches);
