use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, GameMode};

pub const DEFAULT_THINK_DELAY_MS: u64 = 500;
pub const MAX_THINK_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the computer answers. Purely cosmetic.
    pub think_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Normal,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms ({}) must not exceed {}",
                self.think_delay_ms, MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_long_think_delay_is_rejected() {
        let settings = TicTacToeSettings {
            think_delay_ms: MAX_THINK_DELAY_MS + 1,
            ..TicTacToeSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: TicTacToeSettings = serde_yaml_ng::from_str("difficulty: hard\n").unwrap();

        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.mode, GameMode::VsComputer);
        assert_eq!(settings.think_delay_ms, DEFAULT_THINK_DELAY_MS);
    }
}
