use tictactoe_engine::game::{BOARD_CELLS, BOARD_SIDE, Mark, Outcome};
use tictactoe_engine::session::{GameOverReport, GameSnapshot, SessionBroadcaster};

#[derive(Clone)]
pub struct TerminalBroadcaster;

impl TerminalBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

fn cell_label(mark: Mark, index: usize) -> String {
    match mark {
        // Empty cells show the key that places a mark there.
        Mark::Empty => (index + 1).to_string(),
        mark => mark.to_string(),
    }
}

fn format_board(board: &[Mark; BOARD_CELLS]) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIDE * 2 - 1);
    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let index = row * BOARD_SIDE + col;
                format!(" {} ", cell_label(board[index], index))
            })
            .collect();
        lines.push(cells.join("|"));
        if row + 1 < BOARD_SIDE {
            lines.push("---+---+---".to_string());
        }
    }
    lines.join("\n")
}

impl SessionBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        println!("\n{}", format_board(&snapshot.board));

        if snapshot.outcome == Outcome::Undecided {
            if snapshot.bot_thinking {
                println!("{} is thinking...", snapshot.current_mark);
            } else {
                println!("{} to move", snapshot.current_mark);
            }
        }
    }

    async fn broadcast_game_over(&self, report: GameOverReport) {
        match report.outcome.winner() {
            Some(winner) => match report.bot_mark {
                Some(bot_mark) if bot_mark == winner => println!("Computer ({}) wins!", winner),
                Some(_) => println!("You win ({})!", winner),
                None => println!("{} wins!", winner),
            },
            None => println!("It's a draw!"),
        }
    }

    async fn broadcast_countdown(&self, seconds_left: u64) {
        println!("Next game in {}...", seconds_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_cells_show_their_keys() {
        let board = [E; BOARD_CELLS];
        let rendered = format_board(&board);
        assert_eq!(rendered.lines().next().unwrap(), " 1 | 2 | 3 ");
    }

    #[test]
    fn test_marks_replace_keys() {
        let board = [X, E, E, E, O, E, E, E, E];
        let rendered = format_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X | 2 | 3 ");
        assert_eq!(lines[1], "---+---+---");
        assert_eq!(lines[2], " 4 | O | 6 ");
    }
}
