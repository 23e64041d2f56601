use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, file, line, message));
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first prefix.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Writes to stderr, keeping stdout for the board. Dropped until
/// [`init_logger`] has run, so library code may log unconditionally.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);

        let line = logger.format_line("2026-01-01 00:00:00", "common/src/games/board.rs", 12, "hello");

        assert_eq!(line, "[2026-01-01 00:00:00][board.rs:12] hello");
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()));

        let line = logger.format_line("ts", "C:\\src\\main.rs", 3, "started");

        assert_eq!(line, "[ts][Client][main.rs:3] started");
    }
}
