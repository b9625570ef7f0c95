use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
        }
    }
}

const NOT_INITIALIZED: &str = "Logger not initialized! Call init_logger() first.";

#[derive(Debug, PartialEq, Eq)]
enum LogOutput {
    Stdout(String),
    Stderr(String),
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(
        &self,
        level: LogLevel,
        timestamp: &str,
        file: &str,
        line: u32,
        message: &str,
    ) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp, level.tag(), prefix, file_name, line, message
            ),
            None => format!("[{}][{}][{}:{}] {}", timestamp, level.tag(), file_name, line, message),
        }
    }

    fn output(&self, level: LogLevel, file: &str, line: u32, message: &str) -> LogOutput {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let formatted = self.format_line(level, &timestamp, file, line, message);
        match level {
            LogLevel::Info => LogOutput::Stdout(formatted),
            LogLevel::Warn => LogOutput::Stderr(formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

fn route(
    logger: Option<&Logger>,
    level: LogLevel,
    file: &str,
    line: u32,
    message: &str,
) -> LogOutput {
    match logger {
        Some(logger) => logger.output(level, file, line, message),
        None => LogOutput::Stderr(NOT_INITIALIZED.to_string()),
    }
}

/// Writes info lines to stdout and warnings to stderr. Before [`init_logger`]
/// every call only prints a warning to stderr.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    match route(LOGGER.get(), level, file, line, message) {
        LogOutput::Stdout(text) => println!("{}", text),
        LogOutput::Stderr(text) => eprintln!("{}", text),
    }
}

/// Logs an informational line tagged with the caller's file and line.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, file!(), line!(), &format!($($arg)*))
    };
}
