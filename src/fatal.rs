//! Terminating error path.
//!
//! Core code returns `Result<T, Fatal>` (or an `anyhow::Error` wrapping a
//! `Fatal`) and only the top level turns it into a process exit through
//! [`exit_on_error`] / [`run_or_exit`]. [`fatal`] is the exit itself: one
//! line on stderr, then `std::process::exit` with no unwinding.

use std::fmt;
use std::io::Write;

use log::error;

use crate::config::UtilConfig;
use crate::metrics;

/// An unrecoverable failure: the message for stderr and the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal {
    message: String,
    exit_code: i32,
}

impl Fatal {
    /// Uses the configured default exit code (1 unless UTILKIT_EXIT_CODE says otherwise).
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(message, UtilConfig::global().default_exit_code)
    }

    /// Uses `cfg.default_exit_code` instead of the process-wide config.
    pub fn from_config(cfg: &UtilConfig, message: impl Into<String>) -> Self {
        Self::with_code(message, cfg.default_exit_code)
    }

    pub fn with_code(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Report and terminate.
    pub fn exit(self) -> ! {
        fatal(&self.message, self.exit_code)
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Fatal {}

/// Write `message` to stderr and terminate the process with `exit_code`.
pub fn fatal(message: &str, exit_code: i32) -> ! {
    metrics::record_fatal_exit();
    if UtilConfig::global().log_fatal {
        error!("fatal (exit {}): {}", exit_code, message);
    }
    let mut err = std::io::stderr().lock();
    // Нечего делать, если stderr закрыт: выходим всё равно.
    let _ = writeln!(err, "{}", message);
    let _ = err.flush();
    std::process::exit(exit_code)
}

/// [`fatal`] with the configured default exit code.
pub fn fatal_default(message: &str) -> ! {
    fatal(message, UtilConfig::global().default_exit_code)
}

/// Top-level adapter: a `Fatal` exits with its own message and code,
/// anything else is printed as `error: {err:#}` and exits with 1.
pub fn exit_on_error(err: anyhow::Error) -> ! {
    match err.downcast::<Fatal>() {
        Ok(f) => f.exit(),
        Err(other) => fatal(&format!("error: {:#}", other), 1),
    }
}

/// Run `f`; return its value or terminate via [`exit_on_error`].
pub fn run_or_exit<T, F>(f: F) -> T
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match f() {
        Ok(v) => v,
        Err(e) => exit_on_error(e),
    }
}
