use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

// 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome is always derived from the board, never cached anywhere.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return match line.mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine { mark, cells: line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_is_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_cells([X, X, X, E, O, O, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::XWins);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_cells([O, X, E, O, X, E, O, E, X]);
        assert_eq!(evaluate(&board), Outcome::OWins);
        assert_eq!(winning_line(&board).unwrap().cells, [0, 3, 6]);
    }

    #[test]
    fn test_diagonal_wins() {
        let board = Board::from_cells([X, O, O, E, X, E, E, E, X]);
        assert_eq!(evaluate(&board), Outcome::XWins);

        let board = Board::from_cells([X, X, O, E, O, E, O, E, E]);
        assert_eq!(evaluate(&board), Outcome::OWins);
        assert_eq!(winning_line(&board).unwrap().cells, [2, 4, 6]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_a_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert_eq!(evaluate(&board), Outcome::XWins);
    }

    #[test]
    fn test_partial_board_is_undecided() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::Undecided);
    }
}
