use std::path::Path;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub game: TicTacToeSettings,
    /// Fixed seed for reproducible games; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}
