use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Harder,
    Easier,
    Help,
    Quit,
}

/// Parses one input line. Cells are typed 1..=9, as laid out on a keypad row by row.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(Command::Reset),
        "+" | "harder" => return Ok(Command::Harder),
        "-" | "easier" => return Ok(Command::Easier),
        "h" | "?" | "help" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
        _ => Err(format!("Unknown command '{}', type 'h' for help", input)),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9     place your mark (1 = top left, 9 = bottom right)
  r       start a new round, scores are kept
  + / -   raise or lower the computer's difficulty
  h       show this help
  q       quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("-3").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("R"), Ok(Command::Reset));
        assert_eq!(parse_command("+"), Ok(Command::Harder));
        assert_eq!(parse_command("-"), Ok(Command::Easier));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_command("").is_err());
        assert!(parse_command("center").is_err());
    }
}
