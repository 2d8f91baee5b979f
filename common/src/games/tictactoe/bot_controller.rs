use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::{check_win, evaluate_outcome};

const CENTER: Position = Position::new(1, 1);
const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Random,
    /// Win, else block, else centre, else a random corner, else first free cell.
    #[default]
    Heuristic,
    Minimax,
}

/// Picks a cell for `mark`. Returns `None` only when the board has no empty
/// cell or `mark` is `Mark::Empty`.
pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    mark.opponent()?;

    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Heuristic => calculate_heuristic_move(board, mark, rng),
        BotType::Minimax => calculate_minimax_move(board, mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied()
}

fn calculate_heuristic_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Option<Position> {
    let opponent = mark.opponent()?;

    if let Some(pos) = find_completing_move(board, mark) {
        return Some(pos);
    }

    if let Some(pos) = find_completing_move(board, opponent) {
        return Some(pos);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    let mut corners = CORNERS;
    rng.shuffle(&mut corners);
    if let Some(&pos) = corners.iter().find(|&&pos| board.is_empty_at(pos)) {
        return Some(pos);
    }

    board.available_moves().first().copied()
}

/// First empty cell (row-major) where `mark` would complete a line.
fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    board.available_moves().into_iter().find(|&pos| {
        let mut trial = *board;
        trial.set(pos, mark);
        check_win(&trial) == Some(mark)
    })
}

/// Full-depth alpha-beta search. Ties between equal scores go to the first
/// cell in row-major order, so the result is deterministic.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<Position> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        board.set(pos, bot_mark);
        let score = minimax(&mut board, 1, false, bot_mark, i32::MIN, i32::MAX);
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate_outcome(board) {
        GameStatus::Won(winner) if winner == bot_mark => return 10 - depth,
        GameStatus::Won(_) => return depth - 10,
        GameStatus::Tied => return 0,
        GameStatus::InProgress => {}
    }

    let mark = if is_maximizing {
        bot_mark
    } else {
        match bot_mark.opponent() {
            Some(opponent) => opponent,
            None => return 0,
        }
    };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        board.set(pos, mark);
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark, alpha, beta);
        board.set(pos, Mark::Empty);

        if is_maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
