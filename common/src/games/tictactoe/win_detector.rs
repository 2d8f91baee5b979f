use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

pub const WINNING_LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let mark = board.get(line[0])?;
        if mark == Mark::Empty {
            return None;
        }
        line[1..]
            .iter()
            .all(|&pos| board.get(pos) == Some(mark))
            .then(|| WinningLine::new(mark, line))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// A completed line wins even on a full board.
pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return GameStatus::Won(mark);
    }

    if board.is_full() {
        return GameStatus::Tied;
    }

    GameStatus::InProgress
}
