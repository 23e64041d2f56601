use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Owned snapshot handed to the engine. The live board is never shared with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

/// Source of the two random decisions the engine makes.
pub trait MoveRng {
    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f32;

    /// Uniform index in `0..len`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl MoveRng for SessionRng {
    fn roll(&mut self) -> f32 {
        self.random_unit()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Asked for a move on a board with no empty cell. The caller should have
    /// reported the game as finished instead.
    #[display("No legal moves left for the computer")]
    NoLegalMoves,
}

impl std::error::Error for EngineError {}

pub fn calculate_move<R: MoveRng + ?Sized>(
    input: &BotInput,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, EngineError> {
    calculate_move_with_probability(input, difficulty.random_move_probability(), rng)
}

/// Plays a random legal cell with probability `random_move_probability`,
/// otherwise the minimax-optimal one.
pub fn calculate_move_with_probability<R: MoveRng + ?Sized>(
    input: &BotInput,
    random_move_probability: f32,
    rng: &mut R,
) -> Result<usize, EngineError> {
    if input.board.legal_moves().is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let index = if rng.roll() < random_move_probability {
        log!("Random move triggered");
        calculate_random_move(&input.board, rng)
    } else {
        calculate_minimax_move(input)
    };

    index.ok_or(EngineError::NoLegalMoves)
}

pub fn calculate_random_move<R: MoveRng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let available_moves = board.legal_moves();
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.pick(available_moves.len())])
}

/// Best cell for `input.bot_mark`, lowest index on ties. `None` on a full board.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.legal_moves() {
        if board.place(index, input.bot_mark).is_err() {
            continue;
        }
        let score = minimax(&mut board, 0, false, input.bot_mark);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive game-tree value of `board` from the point of view of `bot_mark`.
///
/// Wins score `10 - depth`, losses `-10 + depth`, draws `0`. Every
/// hypothetical placement is undone before returning, so `board` comes back
/// exactly as it went in.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = check_win(board.cells()) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        };
    }

    if board.is_full() {
        return 0;
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };
    let mark = if is_maximizing { bot_mark } else { opponent_mark };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    for index in board.legal_moves() {
        if board.place(index, mark).is_err() {
            continue;
        }
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark);
        board.clear(index);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
