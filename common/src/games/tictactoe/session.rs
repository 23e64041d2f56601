use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{EngineError, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSettings;
use super::types::{Difficulty, MoveError, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    #[display("{}", _0)]
    Move(MoveError),

    #[display("{}", _0)]
    Engine(EngineError),

    #[from(ignore)]
    #[display("Engine task failed: {}", _0)]
    TaskFailed(String),
}

impl std::error::Error for SessionError {}

/// Drives one game screen: applies human moves, runs the computer's turn off
/// the interactive task, and keeps the seeded random stream for the session.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    rng: SessionRng,
    think_delay: Duration,
}

impl TicTacToeSession {
    pub fn new(settings: &TicTacToeSettings, rng: SessionRng) -> Self {
        log!(
            "New {:?} session, difficulty {}, seed {}",
            settings.mode,
            settings.difficulty,
            rng.seed()
        );
        Self {
            state: TicTacToeGameState::new(settings.mode, settings.difficulty),
            rng,
            think_delay: settings.think_delay(),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let outcome = self.state.place_mark(index)?;
        log_outcome(outcome);
        Ok(outcome)
    }

    /// Computes and applies the computer's answer. Must only be called when
    /// [`TicTacToeGameState::is_computer_turn`] holds.
    pub async fn play_computer_turn(&mut self) -> Result<(usize, Outcome), SessionError> {
        if !self.state.is_computer_turn() {
            return Err(MoveError::NotYourTurn.into());
        }

        let input = self.state.bot_input();
        let difficulty = self.state.difficulty();
        let mut bot_rng = self.rng.fork();

        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let calculated_move =
            tokio::task::spawn_blocking(move || calculate_move(&input, difficulty, &mut bot_rng))
                .await
                .map_err(|e| SessionError::TaskFailed(e.to_string()))?;

        let index = calculated_move?;
        log!("Computer plays cell {}", index);

        let outcome = self.state.apply_computer_move(index)?;
        log_outcome(outcome);
        Ok((index, outcome))
    }

    pub fn reset(&mut self) {
        self.state.reset();
        log!("Board reset, score X {} : O {}", self.state.scores().x, self.state.scores().o);
    }

    pub fn harder_difficulty(&mut self) -> Difficulty {
        self.state.harder_difficulty()
    }

    pub fn easier_difficulty(&mut self) -> Difficulty {
        self.state.easier_difficulty()
    }
}

fn log_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Win(mark) => log!("{} wins", mark),
        Outcome::Draw => log!("Draw"),
        Outcome::InProgress => {}
    }
}
