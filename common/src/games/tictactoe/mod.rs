mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, EngineError, MoveRng, calculate_minimax_move, calculate_move,
    calculate_move_with_probability, calculate_random_move, minimax,
};
pub use game_state::{COMPUTER_MARK, HUMAN_MARK, TicTacToeGameState};
pub use session::{SessionError, TicTacToeSession};
pub use settings::{DEFAULT_THINK_DELAY_MS, MAX_THINK_DELAY_MS, TicTacToeSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameMode, Mark, MoveError, Outcome, Scores};
pub use win_detector::{LINES, WinningLine, check_win, check_win_with_line};
