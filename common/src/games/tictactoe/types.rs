use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn glyph(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Result of inspecting a board. Always derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Chance that the computer replaces its optimal move with a random legal one.
    pub fn random_move_probability(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.50,
            Difficulty::Normal => 0.15,
            Difficulty::Hard => 0.025,
        }
    }

    /// One tier up, clamped at `Hard`.
    pub fn harder(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// One tier down, clamped at `Easy`.
    pub fn easier(&self) -> Difficulty {
        match self {
            Difficulty::Hard => Difficulty::Normal,
            Difficulty::Normal | Difficulty::Easy => Difficulty::Easy,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown difficulty '{}', expected easy, normal or hard", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two people share the board, X and O alternate by move parity.
    VsPlayer,
    /// The human plays X, the computer answers with O.
    #[default]
    VsComputer,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "vs_player" | "player" | "pvp" => Ok(GameMode::VsPlayer),
            "vs_computer" | "computer" | "cpu" => Ok(GameMode::VsComputer),
            _ => Err(format!("Unknown game mode '{}', expected vs-player or vs-computer", s)),
        }
    }
}

/// Win counters for the current session. They survive board resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }

    pub fn for_mark(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    #[display("Cell {} is out of range or already marked", _0)]
    IllegalMove(usize),

    #[display("Game is already over")]
    GameOver,

    #[display("Not your turn")]
    NotYourTurn,
}

impl std::error::Error for MoveError {}
