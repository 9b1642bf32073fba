//! Leveled logging for the conversion crate.
//!
//! Provides a small global logger with severity filtering, optional file
//! output, and an in-memory capture sink so tests can assert that a
//! diagnostic was actually emitted. The converter only ever logs at
//! warning level (unparseable observation times); everything else it
//! reports through `Result`.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Log Sources
// ---------------------------------------------------------------------------

/// Which part of the crate produced the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Converter,
    System,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Converter => write!(f, "CONVERT"),
            Source::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance. When unset, log calls are dropped silently.
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

/// Entries captured when the logger was initialized with `capture = true`.
static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

pub struct Logger {
    /// Minimum log level to emit
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to additionally record entries in memory
    capture: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, capture: bool) {
        let logger = Logger {
            min_level,
            log_file,
            capture,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    fn log(&self, level: LogLevel, source: &Source, tag: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        let tag_part = tag.map(|t| format!(" [{}]", t)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, source, tag_part, message
        );

        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
            LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
        }

        if self.capture {
            CAPTURED.lock().unwrap().push(log_entry.clone());
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, capture: bool) {
    Logger::init(min_level, log_file.map(String::from), capture);
}

/// Log a general informational message
pub fn info(source: Source, tag: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, &source, tag, message);
    }
}

/// Log a warning message
pub fn warn(source: Source, tag: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, &source, tag, message);
    }
}

/// Log an error message
pub fn error(source: Source, tag: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, &source, tag, message);
    }
}

/// Log a debug message
pub fn debug(source: Source, tag: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, &source, tag, message);
    }
}

// ---------------------------------------------------------------------------
// Capture sink
// ---------------------------------------------------------------------------

/// Drain and return all entries recorded by the capture sink.
///
/// Only populated when the logger was initialized with `capture = true`;
/// intended for tests that need to assert a diagnostic was emitted.
pub fn take_captured() -> Vec<String> {
    std::mem::take(&mut *CAPTURED.lock().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logging_without_init_does_not_panic() {
        warn(Source::System, None, "no logger installed");
    }
}
