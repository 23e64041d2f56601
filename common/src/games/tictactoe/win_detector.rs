use super::types::{CELL_COUNT, Mark};

/// All winning triples: rows, then columns, then the two diagonals.
///
/// When several lines are complete at once (only possible on boards that did
/// not come from alternating play) the first one in this order is reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}
