//! Response bodies for the JSON API.

use common::games::tictactoe::{GameSnapshot, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};

pub const TIE: &str = "Tie";

#[derive(Debug, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub game_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetModeResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl From<Position> for CellPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

/// Shared by `make-move`, `game-state` and `reset`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameStateResponse {
    /// Rows of `"X"`, `"O"` or `null`.
    pub board: Vec<Vec<Option<String>>>,
    pub current_player: String,
    pub game_over: bool,
    /// `"X"`, `"O"`, `"Tie"`, or `null` while the game is running.
    pub winner: Option<String>,
    pub game_mode: Option<String>,
    pub bot_move: Option<CellPosition>,
    pub winning_line: Option<Vec<CellPosition>>,
}

impl GameStateResponse {
    pub fn new(snapshot: &GameSnapshot, bot_move: Option<Position>) -> Self {
        let board = snapshot
            .board
            .rows()
            .iter()
            .map(|row| row.iter().map(|mark| mark_to_wire(*mark)).collect())
            .collect();

        let winner = match snapshot.status {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => mark_to_wire(mark),
            GameStatus::Tied => Some(TIE.to_string()),
        };

        Self {
            board,
            current_player: snapshot.current_player.to_string(),
            game_over: snapshot.status.is_over(),
            winner,
            game_mode: snapshot.mode.map(|mode| mode.as_str().to_string()),
            bot_move: bot_move.map(CellPosition::from),
            winning_line: snapshot
                .winning_line
                .map(|line| line.cells.iter().copied().map(CellPosition::from).collect()),
        }
    }
}

fn mark_to_wire(mark: Mark) -> Option<String> {
    mark.symbol().map(str::to_string)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub active_games: usize,
}
