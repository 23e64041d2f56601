use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    /// `Ok(None)` when nothing has been stored yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct FileContentConfigProvider {
    path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file {}: {}", self.path.display(), err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.path.display(), e))
    }
}
