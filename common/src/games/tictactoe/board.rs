use std::fmt;

use super::types::{CELL_COUNT, Mark, MoveError, Outcome};
use super::win_detector::{WinningLine, check_win, check_win_with_line};

/// 3x3 board, cells indexed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    move_count: u8,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells, counting the marks already present.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        let move_count = cells.iter().filter(|m| !m.is_empty()).count() as u8;
        Self { cells, move_count }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn move_count(&self) -> usize {
        self.move_count as usize
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::IllegalMove(index));
        }

        match self.cells.get_mut(index) {
            Some(cell) if *cell == Mark::Empty => {
                *cell = mark;
                self.move_count += 1;
                Ok(())
            }
            _ => Err(MoveError::IllegalMove(index)),
        }
    }

    /// Undoes a hypothetical placement made during search.
    pub(crate) fn clear(&mut self, index: usize) {
        if self.cells[index] != Mark::Empty {
            self.cells[index] = Mark::Empty;
            self.move_count -= 1;
        }
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = check_win(&self.cells) {
            return Outcome::Win(mark);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.move_count() == CELL_COUNT
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
        self.move_count = 0;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {} ", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from(pattern: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (i, ch) in pattern.chars().filter(|c| !c.is_whitespace()).enumerate() {
        cells[i] = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new();

        assert_eq!(board.move_count(), 0);
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_cell_and_counts_move() {
        let mut board = Board::new();

        assert!(board.place(4, Mark::X).is_ok());

        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected_without_change() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let before = board;

        let result = board.place(0, Mark::O);

        assert_eq!(result, Err(MoveError::IllegalMove(0)));
        assert_eq!(board, before);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();

        assert_eq!(board.place(9, Mark::X), Err(MoveError::IllegalMove(9)));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_place_empty_mark_is_rejected() {
        let mut board = Board::new();

        assert!(board.place(3, Mark::Empty).is_err());
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from("XOX XOO OXX");
        assert_eq!(board.outcome(), Outcome::Draw);
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        // X X X / O O X / X O O, full board with a completed top row.
        let board = board_from("XXX OOX XOO");

        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Win(Mark::X));
        assert_eq!(board.winning_line().map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = board_from("XO. .X. ..O");

        board.reset();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_renders_rows() {
        let board = board_from("X.. .O. ...");
        let text = board.to_string();

        assert!(text.starts_with(" X |   |   "));
        assert_eq!(text.lines().count(), 5);
    }
}
