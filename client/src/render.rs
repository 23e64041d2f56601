use common::games::tictactoe::{
    Board, GameMode, HUMAN_MARK, Mark, Outcome, TicTacToeGameState, WinningLine,
};

/// Board with cell numbers in empty cells and brackets around a winning line.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = board.get(index).unwrap_or(Mark::Empty);
                let symbol = match mark {
                    Mark::Empty => (index + 1).to_string(),
                    _ => mark.to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn status_text(state: &TicTacToeGameState) -> String {
    let vs_computer = state.mode() == GameMode::VsComputer;
    let outcome = state.outcome();

    if let Some(mark) = outcome.winner() {
        return match (vs_computer, mark == HUMAN_MARK) {
            (true, true) => "You win!".to_string(),
            (true, false) => "Computer wins!".to_string(),
            (false, _) => format!("Player {} wins!", mark),
        };
    }
    if outcome == Outcome::Draw {
        return "Draw!".to_string();
    }

    if !vs_computer {
        format!("Player {}'s turn", state.current_mark())
    } else if state.is_computer_turn() {
        "Computer is thinking...".to_string()
    } else {
        "Your turn".to_string()
    }
}

pub fn score_text(state: &TicTacToeGameState) -> String {
    let scores = state.scores();
    let x = scores.for_mark(Mark::X);
    let o = scores.for_mark(Mark::O);
    match state.mode() {
        GameMode::VsComputer => format!("Player: {}   CPU ({}): {}", x, state.difficulty(), o),
        GameMode::VsPlayer => format!("Player X: {}   Player O: {}", x, o),
    }
}

pub fn render_screen(state: &TicTacToeGameState) -> String {
    format!(
        "\n{}\n\n{}\n{}\n",
        render_board(state.board(), state.winning_line()),
        status_text(state),
        score_text(state)
    )
}
