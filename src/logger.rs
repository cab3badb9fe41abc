//! Logging primitives and a process-wide facade.
//!
//! A deliberately small logging surface: a `Logger` trait, a no-op
//! implementation for tests, and a stdout logger that emits one JSON
//! object per line so output stays parseable by log collectors.
//!
//! Call [`init_logger`] once early in `main`, then use the free functions
//! (`info`, `debug`, ...) anywhere in the crate. Before initialization the
//! facade drops messages.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short string form used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Minimal logger interface used throughout the crate.
///
/// Implementors must be `Send + Sync + 'static` so a logger can live in the
/// global facade. Only `log` is required; the level helpers are defined in
/// terms of it.
pub trait Logger: Send + Sync + 'static {
    /// Emit a record at the given level.
    fn log(&self, level: LogLevel, message: &str);

    /// Flush any buffered records.
    fn flush(&self) {}

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Drops every record. Default choice in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Stdout logger emitting compact JSON lines.
///
/// Records below `min_level` are discarded. Example output:
/// `{"ts":"2026-01-05T10:00:00Z","level":"INFO","msg":"crawl finished"}`
#[derive(Debug, Clone, Copy)]
pub struct StdoutLogger {
    min_level: LogLevel,
}

impl StdoutLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// True when a record at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for StdoutLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = serde_json::json!({
            "ts": chrono::Utc::now().to_rfc3339(),
            "level": level.as_str(),
            "msg": message,
        });
        println!("{}", line);
    }

    fn flush(&self) {
        // stdout is line-buffered
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Install the process-wide logger. The first call wins; later calls are
/// ignored, which keeps repeated initialization in tests harmless.
pub fn init_logger<L: Logger>(logger: L) {
    let _ = GLOBAL_LOGGER.set(Box::new(logger));
}

/// Log through the global logger if one is installed.
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.log(level, message);
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loglevel_as_str() {
        assert_eq!(LogLevel::Trace.as_str(), "TRACE");
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_loglevel_ordering_is_monotonic() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_nooplogger_accepts_all_levels() {
        let logger = NoopLogger;
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.flush();
    }

    #[test]
    fn test_stdoutlogger_min_level_filter() {
        let logger = StdoutLogger::new(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Trace));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_stdoutlogger_default_emits_info() {
        let logger = StdoutLogger::default();
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[derive(Default)]
    struct CapturingLogger {
        entries: std::sync::Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for CapturingLogger {
        fn log(&self, level: LogLevel, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    #[test]
    fn test_trait_default_helpers_route_through_log() {
        let logger = CapturingLogger::default();
        logger.info("started");
        logger.error("failed");

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (LogLevel::Info, "started".to_string()));
        assert_eq!(entries[1], (LogLevel::Error, "failed".to_string()));
    }

    #[test]
    fn test_trait_handles_empty_message() {
        let logger = CapturingLogger::default();
        logger.info("");
        assert_eq!(logger.entries.lock().unwrap()[0].1, "");
    }
}
