use thiserror::Error;

use crate::GameId;
use crate::games::tictactoe::Mark;

/// Why a move was rejected. The game state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Mark },
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i64, col: i64 },
    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game not found: {0}")]
    UnknownGameId(GameId),
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("Game mode has not been selected")]
    MissingMode,
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),
}
