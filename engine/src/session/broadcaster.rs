use std::future::Future;

use crate::game::{BOARD_CELLS, GameState, Mark, Outcome, WinningLine};

/// State pushed to the presentation layer after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [Mark; BOARD_CELLS],
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub last_move: Option<usize>,
    pub bot_thinking: bool,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, bot_thinking: bool) -> Self {
        Self {
            board: *state.board().cells(),
            current_mark: state.current_mark(),
            outcome: state.outcome(),
            last_move: state.last_move(),
            bot_thinking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub outcome: Outcome,
    pub winning_line: Option<WinningLine>,
    pub bot_mark: Option<Mark>,
}

pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, report: GameOverReport) -> impl Future<Output = ()> + Send;

    fn broadcast_countdown(&self, seconds_left: u64) -> impl Future<Output = ()> + Send;
}
