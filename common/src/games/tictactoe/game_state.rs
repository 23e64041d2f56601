use super::board::Board;
use super::bot_controller::BotInput;
use super::types::{Difficulty, GameMode, Mark, MoveError, Outcome, Scores};
use super::win_detector::WinningLine;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

/// Everything one game screen owns: the board, whose turn it is, the chosen
/// mode and difficulty, and the running score.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    current_mark: Mark,
    scores: Scores,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            mode,
            difficulty,
            current_mark: Mark::X,
            scores: Scores::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.current_mark == COMPUTER_MARK
            && !self.outcome().is_over()
    }

    /// Places the current player's mark for a human.
    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(index)
    }

    pub fn apply_computer_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.mode != GameMode::VsComputer || self.current_mark != COMPUTER_MARK {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(index)
    }

    fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.place(index, self.current_mark)?;

        let outcome = self.board.outcome();
        match outcome {
            Outcome::Win(mark) => self.scores.record_win(mark),
            Outcome::Draw => {}
            Outcome::InProgress => self.switch_turn(),
        }
        Ok(outcome)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    /// Snapshot for the opponent engine.
    pub fn bot_input(&self) -> BotInput {
        BotInput::new(self.board, COMPUTER_MARK)
    }

    /// New round on the same screen. Scores are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
    }

    pub fn harder_difficulty(&mut self) -> Difficulty {
        self.difficulty = self.difficulty.harder();
        self.difficulty
    }

    pub fn easier_difficulty(&mut self) -> Difficulty {
        self.difficulty = self.difficulty.easier();
        self.difficulty
    }
}
