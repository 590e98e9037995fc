use super::board::Board;
use super::types::{Mark, NoLegalMove, Outcome};
use super::win_detector::evaluate;

/// Pick the optimal move for `bot_mark`, assuming the opponent also plays
/// optimally. Ties between equally scored moves keep the lowest index, so the
/// choice is deterministic.
pub fn choose_move(board: &Board, bot_mark: Mark, human_mark: Mark) -> Result<usize, NoLegalMove> {
    let mut scratch = *board;
    let mut best: Option<(i32, usize)> = None;

    for index in board.available_moves() {
        scratch.set(index, bot_mark);
        let score = minimax(&mut scratch, bot_mark, human_mark, 0, false);
        scratch.set(index, Mark::Empty);

        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, index)),
        }
    }

    best.map(|(_, index)| index).ok_or(NoLegalMove)
}

// Terminal scores are offset by depth so the search prefers the fastest win
// and the slowest loss among otherwise equal lines.
fn minimax(board: &mut Board, bot_mark: Mark, human_mark: Mark, depth: i32, maximizing: bool) -> i32 {
    let outcome = evaluate(board);
    if let Some(winner) = outcome.winner() {
        return if winner == bot_mark {
            10 - depth
        } else {
            depth - 10
        };
    }
    if outcome == Outcome::Draw {
        return 0;
    }

    let mark = if maximizing { bot_mark } else { human_mark };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        board.set(index, mark);
        let score = minimax(board, bot_mark, human_mark, depth + 1, !maximizing);
        board.set(index, Mark::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
