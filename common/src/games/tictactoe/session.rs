use std::time::{Duration, Instant};

use crate::games::SessionRng;
use crate::{GameError, GameId};
use super::board::Board;
use super::bot_controller::{BotType, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub bot_move: Option<Position>,
}

/// Read-only view of a session handed to the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Mark,
    pub status: GameStatus,
    pub mode: Option<GameMode>,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug)]
pub struct GameSession {
    id: GameId,
    state: TicTacToeGameState,
    mode: Option<GameMode>,
    bot_type: BotType,
    rng: SessionRng,
    last_activity: Instant,
}

impl GameSession {
    pub fn new(id: GameId, bot_type: BotType, rng: SessionRng) -> Self {
        Self {
            id,
            state: TicTacToeGameState::new(),
            mode: None,
            bot_type,
            rng,
            last_activity: Instant::now(),
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.touch();
    }

    /// Plays the current player's mark at `pos`. In bot mode the bot answers
    /// with the opposing mark before this returns, unless the human move
    /// ended the game.
    pub fn play(&mut self, pos: Position) -> Result<MoveResult, GameError> {
        let mode = self.mode.ok_or(GameError::MissingMode)?;

        let human_mark = self.state.current_mark;
        self.state.apply_move(pos, human_mark)?;
        self.touch();

        if mode != GameMode::Bot || self.state.status.is_over() {
            return Ok(MoveResult { bot_move: None });
        }

        let bot_mark = self.state.current_mark;
        let bot_move = calculate_move(self.bot_type, &self.state.board, bot_mark, &mut self.rng);
        if let Some(bot_pos) = bot_move {
            self.state.apply_move(bot_pos, bot_mark)?;
        }

        Ok(MoveResult { bot_move })
    }

    /// Starts over with the same id; the selected mode is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.touch();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.state.board,
            current_player: self.state.current_mark,
            status: self.state.status,
            mode: self.mode,
            last_move: self.state.last_move,
            winning_line: self.state.winning_line(),
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }
}
