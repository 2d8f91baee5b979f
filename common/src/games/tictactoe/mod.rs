mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{BotType, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::{GameSession, GameSnapshot, MoveResult};
pub use types::{GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate_outcome};
