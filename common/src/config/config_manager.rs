use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value; falls back to
/// `TConfig::default()` while nothing is stored.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    serializer: TSerializer,
    provider: TProvider,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(path.as_ref()),
            YamlConfigSerializer,
        )
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            provider,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, GameMode, TicTacToeSettings};

    fn temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("tictactoe_config_test_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager: ConfigManager<_, TicTacToeSettings> = ConfigManager::from_yaml_file(temp_file_path());

        let config = manager.get_config().unwrap();

        assert_eq!(config, TicTacToeSettings::default());
    }

    #[test]
    fn test_set_then_get_from_fresh_manager() {
        let path = temp_file_path();
        let settings = TicTacToeSettings {
            mode: GameMode::VsPlayer,
            difficulty: Difficulty::Hard,
            think_delay_ms: 0,
        };

        let writer: ConfigManager<_, TicTacToeSettings> = ConfigManager::from_yaml_file(&path);
        assert!(writer.set_config(&settings).is_ok());

        let reader: ConfigManager<_, TicTacToeSettings> = ConfigManager::from_yaml_file(&path);
        let loaded = reader.get_config();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, Ok(settings));
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let path = temp_file_path();
        let manager: ConfigManager<_, TicTacToeSettings> = ConfigManager::from_yaml_file(&path);
        let settings = TicTacToeSettings {
            think_delay_ms: u64::MAX,
            ..TicTacToeSettings::default()
        };

        assert!(manager.set_config(&settings).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_file_content_is_reported() {
        let path = temp_file_path();
        std::fs::write(&path, "think_delay_ms: 999999\n").unwrap();
        let manager: ConfigManager<_, TicTacToeSettings> = ConfigManager::from_yaml_file(&path);

        let result = manager.get_config();
        let _ = std::fs::remove_file(&path);

        assert!(result.unwrap_err().starts_with("Config validation error"));
    }
}
