//! Diagnostic logging sink.
//!
//! A level-filtered logger with optional console and file output,
//! constructed by the caller and passed explicitly to whatever needs it —
//! there is no global instance. The planning engines never log; the
//! orchestration layer logs around engine calls.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Message severity, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Level-filtered diagnostic sink.
///
/// Messages below `min_level` are dropped. Console output goes to stderr.
/// File write failures are swallowed — diagnostics never abort planning.
///
/// # Example
///
/// ```
/// use roadplan::logging::{Logger, LogLevel};
///
/// let logger = Logger::new()
///     .with_min_level(LogLevel::Info)
///     .with_console(false);
/// logger.info("planning started");
/// logger.debug("dropped: below minimum level");
/// ```
#[derive(Debug)]
pub struct Logger {
    min_level: LogLevel,
    console: bool,
    file_path: Option<PathBuf>,
    file: Option<Mutex<File>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a console-only logger at `Info` level.
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            console: true,
            file_path: None,
            file: None,
        }
    }

    /// Sets the minimum level that passes the filter.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enables or disables console (stderr) output.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Attaches a log file, appending to it if it exists.
    ///
    /// # Errors
    /// Propagates the I/O error if the file cannot be opened.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.file_path = Some(path);
        self.file = Some(Mutex::new(file));
        Ok(self)
    }

    /// Current minimum level.
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Path of the attached log file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Logs a message at the given level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let line = format!("[{level}] {message}");
        if self.console {
            eprintln!("{line}");
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    /// Logs at `Debug` level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs at `Info` level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs at `Warning` level.
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Logs at `Error` level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Logs at `Critical` level.
    pub fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }

    /// Logs the start of an algorithm run.
    pub fn log_algorithm_start(&self, algorithm: &str, params: &str) {
        self.info(&format!("{algorithm} started ({params})"));
    }

    /// Logs the end of an algorithm run with its elapsed time.
    pub fn log_algorithm_end(&self, algorithm: &str, elapsed_ms: f64) {
        self.info(&format!("{algorithm} finished in {elapsed_ms:.3} ms"));
    }

    /// Logs a timing measurement for an operation.
    pub fn log_performance(&self, operation: &str, elapsed_ms: f64) {
        self.debug(&format!("{operation}: {elapsed_ms:.3} ms"));
    }
}
