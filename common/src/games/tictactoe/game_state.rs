use crate::MoveError;
use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

/// Turn-taking state machine for one game. X always moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places `player`'s mark at `pos`. On error nothing changes.
    ///
    /// The turn passes to the opponent only while the game stays in
    /// progress; after a winning or tying move `current_mark` still names
    /// the player who made it.
    pub fn apply_move(&mut self, pos: Position, player: Mark) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if player != self.current_mark {
            return Err(MoveError::NotYourTurn {
                expected: self.current_mark,
            });
        }

        match self.board.get(pos) {
            None => {
                return Err(MoveError::OutOfBounds {
                    row: pos.row as i64,
                    col: pos.col as i64,
                });
            }
            Some(Mark::Empty) => {}
            Some(_) => {
                return Err(MoveError::CellOccupied {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        self.board.set(pos, player);
        self.last_move = Some(pos);
        self.status = evaluate_outcome(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
