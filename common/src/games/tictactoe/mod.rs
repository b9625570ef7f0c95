mod board;
mod bot_controller;
mod error;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move, minimax, select_best_move};
pub use error::{IllegalMove, SessionError};
pub use session::{Controller, GameMode, GameSession, Outcome, RoundState};
pub use types::{BOARD_SIZE, Cell, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
