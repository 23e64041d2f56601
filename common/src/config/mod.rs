mod config_manager;
mod content_provider;
mod serializer;

pub use config_manager::ConfigManager;
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use serializer::{ConfigSerializer, YamlConfigSerializer};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
