#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Place(usize),
    Reset,
    Quit,
}

/// Cells are entered as 1-9, left to right, top to bottom; the board itself
/// is indexed 0-8.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" | "exit" => Some(InputCommand::Quit),
        "r" | "reset" => Some(InputCommand::Reset),
        _ => {
            let cell: usize = trimmed.parse().ok()?;
            if (1..=9).contains(&cell) {
                Some(InputCommand::Place(cell - 1))
            } else {
                None
            }
        }
    }
}
