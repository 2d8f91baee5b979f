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

    pub fn log(&self, message: &str) {
        write_line(self.prefix.as_deref(), message);
    }
}

fn write_line(prefix: Option<&str>, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    if let Some(prefix) = prefix {
        println!("[{}][{}] {}", timestamp, prefix, message);
    } else {
        println!("[{}] {}", timestamp, message);
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Logs through the process logger, or without a prefix when `init_logger`
/// has not run (library use, tests).
pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(message),
        None => write_line(None, message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
