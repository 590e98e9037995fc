use super::board::Board;
use super::types::{GameMode, Mark, MoveError, Outcome};
use super::win_detector::evaluate;

/// One game in progress. X always moves first; who plays X is decided by the
/// session when the game is created.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
    bot_mark: Option<Mark>,
    last_move: Option<usize>,
}

impl GameState {
    pub fn human_vs_human() -> Self {
        Self {
            board: Board::new(),
            mode: GameMode::HumanVsHuman,
            current_mark: Mark::X,
            bot_mark: None,
            last_move: None,
        }
    }

    pub fn human_vs_bot(bot_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            mode: GameMode::HumanVsBot,
            current_mark: Mark::X,
            bot_mark: Some(bot_mark),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn bot_mark(&self) -> Option<Mark> {
        self.bot_mark
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.bot_mark.and_then(|mark| mark.opponent())
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_decided()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.bot_mark == Some(self.current_mark) && !self.is_over()
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mark != self.current_mark {
            return Err(MoveError::OutOfTurn(mark));
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        let state = GameState::human_vs_human();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_turn_alternates_after_accepted_move() {
        let mut state = GameState::human_vs_human();
        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.place_mark(Mark::O, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut state = GameState::human_vs_human();
        let result = state.place_mark(Mark::O, 0);
        assert_eq!(result, Err(MoveError::OutOfTurn(Mark::O)));
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let mut state = GameState::human_vs_human();
        state.place_mark(Mark::X, 4).unwrap();
        let before = *state.board();

        let result = state.place_mark(Mark::O, 4);

        assert_eq!(result, Err(MoveError::Occupied(4)));
        assert_eq!(state.board(), &before);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut state = GameState::human_vs_human();
        assert_eq!(state.place_mark(Mark::X, 42), Err(MoveError::OutOfRange(42)));
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = GameState::human_vs_human();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::XWins);

        let result = state.place_mark(Mark::O, 8);
        assert_eq!(result, Err(MoveError::GameOver));
    }

    #[test]
    fn test_turn_does_not_switch_on_final_move() {
        let mut state = GameState::human_vs_human();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_bot_turn_detection() {
        let mut state = GameState::human_vs_bot(Mark::O);
        assert_eq!(state.human_mark(), Some(Mark::X));
        assert!(!state.is_bot_turn());

        state.place_mark(Mark::X, 4).unwrap();
        assert!(state.is_bot_turn());
    }
}
