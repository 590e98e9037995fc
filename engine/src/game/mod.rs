mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board};
pub use bot_controller::choose_move;
pub use game_state::GameState;
pub use types::{GameMode, Mark, MoveError, NoLegalMove, Outcome, WinningLine};
pub use win_detector::{evaluate, winning_line};
