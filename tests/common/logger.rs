//! Structured test logging with phase and duration tracking.
#![allow(dead_code)]
//!
//! # Usage
//!
//! ```rust,ignore
//! let log = TestLogger::new("test_example");
//! log.phase("setup");
//! // ... setup code ...
//! log.phase("execute");
//! log.debug("intermediate result");
//! log.finish_ok();
//! ```
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use std::fmt::Display;
use std::sync::Mutex;
use std::time::Instant;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }

    fn from_env() -> Self {
        std::env::var("TEST_LOG_LEVEL")
            .ok()
            .and_then(|v| Self::from_str(&v))
            .unwrap_or(Self::Info)
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{s}")
    }
}

/// Per-test structured logger.
pub struct TestLogger {
    test_name: String,
    started: Instant,
    min_level: LogLevel,
    phase: Mutex<Option<String>>,
}

impl TestLogger {
    /// Create a logger for the named test.
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            started: Instant::now(),
            min_level: LogLevel::from_env(),
            phase: Mutex::new(None),
        };
        logger.log(LogLevel::Info, "START");
        logger
    }

    /// Enter a named phase (setup, execute, verify, teardown).
    pub fn phase(&self, name: &str) {
        *self.phase.lock().unwrap() = Some(name.to_string());
        self.log(LogLevel::Debug, &format!("phase: {name}"));
    }

    /// Log an outgoing HTTP request.
    pub fn http_request(&self, method: &str, url: &str) {
        self.log(LogLevel::Debug, &format!("{method} {url}"));
    }

    pub fn trace(&self, msg: &str) {
        self.log(LogLevel::Trace, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    /// Mark the test finished successfully.
    pub fn finish_ok(&self) {
        let elapsed = self.started.elapsed();
        self.log(LogLevel::Info, &format!("PASS ({elapsed:.2?})"));
    }

    /// Mark the test finished with a failure reason.
    pub fn finish_err(&self, reason: &str) {
        let elapsed = self.started.elapsed();
        self.log(LogLevel::Error, &format!("FAIL ({elapsed:.2?}): {reason}"));
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if level < self.min_level {
            return;
        }
        let phase = self.phase.lock().unwrap();
        match phase.as_deref() {
            Some(phase) => eprintln!("[{level}] {} [{phase}] {msg}", self.test_name),
            None => eprintln!("[{level}] {} {msg}", self.test_name),
        }
    }
}
