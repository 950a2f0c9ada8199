//! Centralized configuration for utilkit.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - UtilConfig::from_env() reads the env vars; with_* methods adjust a copy.
//! - UtilConfig::global() is read once per process and used by the helpers.
//! - UtilConfig::install() replaces the env-derived copy, once, before first use.
//!
//! Defaults keep the plain behavior: exit code 1, no extra log record.

use std::sync::OnceLock;

use anyhow::{anyhow, Result};

/// Exit code used when the caller does not pass one.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Top-level configuration for the helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilConfig {
    /// Exit code for fatal_default() and Fatal::new().
    /// Env: UTILKIT_EXIT_CODE (default 1)
    pub default_exit_code: i32,

    /// Emit a log::error! record before a fatal exit (stderr line is always written).
    /// Env: UTILKIT_LOG_FATAL (default false; "1|true|on|yes" => true)
    pub log_fatal: bool,
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self {
            default_exit_code: DEFAULT_EXIT_CODE,
            log_fatal: false,
        }
    }
}

static GLOBAL: OnceLock<UtilConfig> = OnceLock::new();

fn parse_flag(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "on" || s == "yes"
}

impl UtilConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("UTILKIT_EXIT_CODE") {
            if let Ok(n) = v.trim().parse::<i32>() {
                cfg.default_exit_code = n;
            }
        }

        if let Ok(v) = std::env::var("UTILKIT_LOG_FATAL") {
            cfg.log_fatal = parse_flag(&v);
        }

        cfg
    }

    /// Process-wide configuration, loaded from env on first use.
    pub fn global() -> &'static UtilConfig {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Make `self` the process-wide configuration.
    /// Fails if global() was already read or another config was installed.
    pub fn install(self) -> Result<()> {
        GLOBAL
            .set(self)
            .map_err(|_| anyhow!("utilkit config already initialized"))
    }

    // ---------- builder ----------

    pub fn with_default_exit_code(mut self, code: i32) -> Self {
        self.default_exit_code = code;
        self
    }

    pub fn with_log_fatal(mut self, on: bool) -> Self {
        self.log_fatal = on;
        self
    }
}
